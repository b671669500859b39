use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, IntoActiveModel};

use crate::fixtures::user::UserFixtures;

pub struct StudentFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentFixtures<'a> {
    pub(crate) fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a user with role `student` and their student record.
    ///
    /// When a room is given the student is placed in it and the room's occupancy is
    /// incremented, so the room model passed in is stale afterwards.
    pub async fn insert_student(
        &self,
        n: i32,
        institution_id: i32,
        room: Option<&entity::room::Model>,
    ) -> Result<(entity::app_user::Model, entity::student::Model), DbErr> {
        self.insert_student_created_at(n, institution_id, room, Utc::now().naive_utc())
            .await
    }

    /// Same as [`Self::insert_student`] with an explicit creation time.
    pub async fn insert_student_created_at(
        &self,
        n: i32,
        institution_id: i32,
        room: Option<&entity::room::Model>,
        created_at: NaiveDateTime,
    ) -> Result<(entity::app_user::Model, entity::student::Model), DbErr> {
        let user = UserFixtures::new(self.db)
            .insert_user(n, "student", Some(institution_id))
            .await?;

        if let Some(room) = room {
            let occupancy = room.occupancy + 1;
            let mut room_am = room.clone().into_active_model();
            room_am.occupancy = ActiveValue::Set(occupancy);
            if occupancy >= room.capacity {
                room_am.status = ActiveValue::Set("occupied".to_string());
            }
            room_am.update(self.db).await?;
        }

        let student = entity::student::ActiveModel {
            user_id: ActiveValue::Set(user.id),
            institution_id: ActiveValue::Set(institution_id),
            student_id: ActiveValue::Set(format!("STU-{:04}", n)),
            department: ActiveValue::Set("Computer Science".to_string()),
            year_of_study: ActiveValue::Set(2),
            hostel_id: ActiveValue::Set(room.map(|r| r.hostel_id)),
            room_id: ActiveValue::Set(room.map(|r| r.id)),
            created_at: ActiveValue::Set(created_at),
            updated_at: ActiveValue::Set(created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok((user, student))
    }
}
