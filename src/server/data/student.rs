use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

/// Values for a new student record.
pub struct NewStudent {
    pub user_id: i32,
    pub institution_id: i32,
    pub student_id: String,
    pub department: String,
    pub year_of_study: i32,
}

/// Changes to a student record; `None` leaves a field unchanged.
#[derive(Default)]
pub struct StudentChanges {
    pub student_id: Option<String>,
    pub department: Option<String>,
    pub year_of_study: Option<i32>,
}

pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a student without a hostel or room
    pub async fn create(&self, student: NewStudent) -> Result<entity::student::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::student::ActiveModel {
            user_id: ActiveValue::Set(student.user_id),
            institution_id: ActiveValue::Set(student.institution_id),
            student_id: ActiveValue::Set(student.student_id),
            department: ActiveValue::Set(student.department),
            year_of_study: ActiveValue::Set(student.year_of_study),
            hostel_id: ActiveValue::Set(None),
            room_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(
        &self,
        institution_id: i32,
        student_id: i32,
    ) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find_by_id(student_id)
            .filter(entity::student::Column::InstitutionId.eq(institution_id))
            .one(self.db)
            .await
    }

    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find()
            .filter(entity::student::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Students of the institution with their user accounts, newest first
    ///
    /// Students created at the same time are ordered by descending ID.
    pub async fn list(
        &self,
        institution_id: i32,
    ) -> Result<Vec<(entity::student::Model, Option<entity::app_user::Model>)>, DbErr> {
        entity::prelude::Student::find()
            .filter(entity::student::Column::InstitutionId.eq(institution_id))
            .order_by_desc(entity::student::Column::CreatedAt)
            .order_by_desc(entity::student::Column::Id)
            .find_also_related(entity::prelude::AppUser)
            .all(self.db)
            .await
    }

    pub async fn count(&self, institution_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Student::find()
            .filter(entity::student::Column::InstitutionId.eq(institution_id))
            .count(self.db)
            .await
    }

    pub async fn update(
        &self,
        student: entity::student::Model,
        changes: StudentChanges,
    ) -> Result<entity::student::Model, DbErr> {
        let mut student_am = student.into_active_model();
        if let Some(student_id) = changes.student_id {
            student_am.student_id = ActiveValue::Set(student_id);
        }
        if let Some(department) = changes.department {
            student_am.department = ActiveValue::Set(department);
        }
        if let Some(year_of_study) = changes.year_of_study {
            student_am.year_of_study = ActiveValue::Set(year_of_study);
        }
        student_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        student_am.update(self.db).await
    }

    /// Places the student in a room of a hostel, or clears both with `None`
    pub async fn set_room(
        &self,
        student: entity::student::Model,
        placement: Option<(i32, i32)>,
    ) -> Result<entity::student::Model, DbErr> {
        let mut student_am = student.into_active_model();
        student_am.hostel_id = ActiveValue::Set(placement.map(|(hostel_id, _)| hostel_id));
        student_am.room_id = ActiveValue::Set(placement.map(|(_, room_id)| room_id));
        student_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        student_am.update(self.db).await
    }

    pub async fn delete(&self, student_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Student::delete_by_id(student_id)
            .exec(self.db)
            .await
    }
}
