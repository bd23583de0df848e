use chrono::NaiveDate;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::factory, TestContext};

impl TestContext {
    pub fn insurer(&self) -> InsurerFixtures<'_> {
        InsurerFixtures { context: self }
    }
}

pub struct InsurerFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> InsurerFixtures<'a> {
    pub async fn insert_insurer(&self, name: &str) -> Result<entity::insurer::Model, TestError> {
        Ok(
            entity::prelude::Insurer::insert(entity::insurer::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                tax_id: ActiveValue::Set("900.000.000-1".to_string()),
                contact: ActiveValue::Set("contacto@example.com".to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_contract(
        &self,
        insurer_id: i32,
        name: &str,
        end_date: NaiveDate,
        monthly_cap: f64,
    ) -> Result<entity::contract::Model, TestError> {
        Ok(
            entity::prelude::Contract::insert(entity::contract::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                start_date: ActiveValue::Set(factory::date(2024, 1, 1)),
                end_date: ActiveValue::Set(end_date),
                rate_type: ActiveValue::Set("SOAT".to_string()),
                monthly_cap: ActiveValue::Set(monthly_cap),
                conditions: ActiveValue::Set(None),
                insurer_id: ActiveValue::Set(insurer_id),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
