//! Student service.
//!
//! Students are user accounts with role `student` plus a student record. Placing a student
//! in a room increments the room's occupancy; moving or deleting the student releases it.
//! Every multi-step write runs inside one transaction.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        room::RoomStatus,
        student::{CreateStudentDto, StudentDto, UpdateStudentDto},
        user::Role,
    },
    server::{
        data::{
            hostel::HostelRepository,
            room::RoomRepository,
            student::{NewStudent, StudentChanges, StudentRepository},
            user::{NewUser, UserRepository},
        },
        error::{resource::ResourceError, Error},
        model::db::{parse_column, student_dto, StudentModel},
        util::{
            password::hash_password,
            validate::{normalize_email, require_non_empty},
        },
    },
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the institution's students flattened with their account, hostel, and room.
    ///
    /// Newest students come first; students created at the same time are ordered by
    /// descending ID.
    pub async fn list(&self, institution_id: i32) -> Result<Vec<StudentDto>, Error> {
        let students = StudentRepository::new(self.db).list(institution_id).await?;
        let hostels: HashMap<i32, _> = HostelRepository::new(self.db)
            .list(institution_id)
            .await?
            .into_iter()
            .map(|hostel| (hostel.id, hostel))
            .collect();
        let rooms: HashMap<i32, _> = RoomRepository::new(self.db)
            .list(institution_id, None)
            .await?
            .into_iter()
            .map(|room| (room.id, room))
            .collect();

        students
            .into_iter()
            .map(|(student, user)| {
                let user = user.ok_or_else(|| missing_user(&student))?;
                let hostel = student.hostel_id.and_then(|id| hostels.get(&id).cloned());
                let room = student.room_id.and_then(|id| rooms.get(&id).cloned());

                Ok(student_dto(student, user, hostel, room))
            })
            .collect()
    }

    pub async fn get(&self, institution_id: i32, student_id: i32) -> Result<StudentDto, Error> {
        let student = StudentRepository::new(self.db)
            .get(institution_id, student_id)
            .await?
            .ok_or(ResourceError::not_found("Student", student_id))?;

        load_student(self.db, student).await
    }

    /// Creates the student's account and record, placing them in a room when one is given.
    ///
    /// # Returns
    /// - `Err(Error::ResourceError(Validation))` - Blank required field or year below 1
    /// - `Err(Error::ResourceError(Conflict))` - Email already registered, or the room is full
    ///   or under maintenance
    /// - `Err(Error::ResourceError(NotFound))` - Room is not in the institution
    pub async fn create(
        &self,
        institution_id: i32,
        student: CreateStudentDto,
    ) -> Result<StudentDto, Error> {
        require_non_empty("name", &student.name)?;
        require_non_empty("email", &student.email)?;
        require_non_empty("password", &student.password)?;
        require_non_empty("student_id", &student.student_id)?;
        require_non_empty("department", &student.department)?;
        validate_year(student.year_of_study)?;

        let email = normalize_email(&student.email);
        let password_hash = hash_password(&student.password)?;

        let txn = self.db.begin().await?;

        let user_repo = UserRepository::new(&txn);
        if user_repo.get_by_email(&email).await?.is_some() {
            return Err(ResourceError::Conflict("Email is already registered".to_string()).into());
        }

        let user = user_repo
            .create(NewUser {
                name: student.name.trim().to_string(),
                email,
                password_hash,
                phone: student.phone,
                gender: student.gender,
                role: Role::Student,
                institution_id: Some(institution_id),
            })
            .await?;

        let mut record = StudentRepository::new(&txn)
            .create(NewStudent {
                user_id: user.id,
                institution_id,
                student_id: student.student_id,
                department: student.department,
                year_of_study: student.year_of_study,
            })
            .await?;

        if let Some(room_id) = student.room_id {
            record = occupy_room(&txn, record, room_id).await?;
        }

        let dto = load_student(&txn, record).await?;

        txn.commit().await?;

        Ok(dto)
    }

    /// Applies a partial update.
    ///
    /// `room_id` absent keeps the placement, `null` releases the room, and a different room
    /// moves the student, releasing the previous one.
    pub async fn update(
        &self,
        institution_id: i32,
        student_id: i32,
        changes: UpdateStudentDto,
    ) -> Result<StudentDto, Error> {
        if let Some(name) = &changes.name {
            require_non_empty("name", name)?;
        }
        if let Some(id) = &changes.student_id {
            require_non_empty("student_id", id)?;
        }
        if let Some(department) = &changes.department {
            require_non_empty("department", department)?;
        }
        if let Some(year) = changes.year_of_study {
            validate_year(year)?;
        }

        let txn = self.db.begin().await?;

        let student_repo = StudentRepository::new(&txn);
        let student = student_repo
            .get(institution_id, student_id)
            .await?
            .ok_or(ResourceError::not_found("Student", student_id))?;

        UserRepository::new(&txn)
            .update_profile(student.user_id, changes.name, changes.phone, changes.gender)
            .await?;

        let mut student = student_repo
            .update(
                student,
                StudentChanges {
                    student_id: changes.student_id,
                    department: changes.department,
                    year_of_study: changes.year_of_study,
                },
            )
            .await?;

        match changes.room_id {
            Some(room_id) if room_id == student.room_id => {}
            Some(None) => {
                student = release_room(&txn, student).await?;
            }
            Some(Some(room_id)) => {
                student = release_room(&txn, student).await?;
                student = occupy_room(&txn, student, room_id).await?;
            }
            None => {}
        }

        let dto = load_student(&txn, student).await?;

        txn.commit().await?;

        Ok(dto)
    }

    /// Deletes the student record and account, releasing their room.
    pub async fn delete(&self, institution_id: i32, student_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let student_repo = StudentRepository::new(&txn);
        let student = student_repo
            .get(institution_id, student_id)
            .await?
            .ok_or(ResourceError::not_found("Student", student_id))?;

        let student = release_room(&txn, student).await?;
        student_repo.delete(student.id).await?;
        UserRepository::new(&txn).delete(student.user_id).await?;

        txn.commit().await?;

        tracing::debug!("Deleted student ID {}", student_id);

        Ok(())
    }
}

/// Places the student in a room of their institution and takes one bed.
///
/// Rooms under maintenance take no new students.
async fn occupy_room<C: ConnectionTrait>(
    db: &C,
    student: StudentModel,
    room_id: i32,
) -> Result<StudentModel, Error> {
    let room_repo = RoomRepository::new(db);
    let room = room_repo
        .get(student.institution_id, room_id)
        .await?
        .ok_or(ResourceError::not_found("Room", room_id))?;

    let status = parse_column::<RoomStatus>(&room.status)?;
    if status == RoomStatus::Maintenance {
        return Err(ResourceError::Conflict(format!(
            "Room {} is under maintenance",
            room.room_number
        ))
        .into());
    }
    if room.occupancy >= room.capacity {
        return Err(ResourceError::Conflict(format!("Room {} is full", room.room_number)).into());
    }

    let occupancy = room.occupancy + 1;
    let status = status.for_occupancy(occupancy, room.capacity);
    let hostel_id = room.hostel_id;

    room_repo.set_occupancy(room, occupancy, status).await?;

    let student = StudentRepository::new(db)
        .set_room(student, Some((hostel_id, room_id)))
        .await?;

    Ok(student)
}

/// Clears the student's placement and frees their bed, if they have one.
async fn release_room<C: ConnectionTrait>(
    db: &C,
    student: StudentModel,
) -> Result<StudentModel, Error> {
    let Some(room_id) = student.room_id else {
        return Ok(student);
    };

    let room_repo = RoomRepository::new(db);
    if let Some(room) = room_repo.get(student.institution_id, room_id).await? {
        let occupancy = (room.occupancy - 1).max(0);
        let status =
            parse_column::<RoomStatus>(&room.status)?.for_occupancy(occupancy, room.capacity);

        room_repo.set_occupancy(room, occupancy, status).await?;
    }

    let student = StudentRepository::new(db).set_room(student, None).await?;

    Ok(student)
}

async fn load_student<C: ConnectionTrait>(
    db: &C,
    student: StudentModel,
) -> Result<StudentDto, Error> {
    let user = UserRepository::new(db)
        .get(student.user_id)
        .await?
        .ok_or_else(|| missing_user(&student))?;
    let hostel = match student.hostel_id {
        Some(hostel_id) => {
            HostelRepository::new(db)
                .get(student.institution_id, hostel_id)
                .await?
        }
        None => None,
    };
    let room = match student.room_id {
        Some(room_id) => RoomRepository::new(db).get(student.institution_id, room_id).await?,
        None => None,
    };

    Ok(student_dto(student, user, hostel, room))
}

fn validate_year(year_of_study: i32) -> Result<(), ResourceError> {
    if year_of_study < 1 {
        return Err(ResourceError::Validation(
            "year_of_study must be at least 1".to_string(),
        ));
    }

    Ok(())
}

fn missing_user(student: &StudentModel) -> Error {
    // Only reachable if the user foreign key is not enforced
    Error::InternalError(format!(
        "Failed to find user ID {} for student ID {}",
        student.user_id, student.id
    ))
}
