use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::db::ContractModel;

/// Writable contract columns.
pub struct ContractFields {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub rate_type: String,
    pub monthly_cap: f64,
    pub conditions: Option<String>,
    pub insurer_id: i32,
}

pub struct ContractRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ContractRepository<'a, C> {
    /// Creates a new instance of [`ContractRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, fields: ContractFields) -> Result<ContractModel, DbErr> {
        let contract = entity::contract::ActiveModel {
            name: ActiveValue::Set(fields.name),
            start_date: ActiveValue::Set(fields.start_date),
            end_date: ActiveValue::Set(fields.end_date),
            rate_type: ActiveValue::Set(fields.rate_type),
            monthly_cap: ActiveValue::Set(fields.monthly_cap),
            conditions: ActiveValue::Set(fields.conditions),
            insurer_id: ActiveValue::Set(fields.insurer_id),
            ..Default::default()
        };

        contract.insert(self.db).await
    }

    pub async fn get_by_id(&self, contract_id: i32) -> Result<Option<ContractModel>, DbErr> {
        entity::prelude::Contract::find_by_id(contract_id)
            .one(self.db)
            .await
    }

    /// Gets a page of contracts ordered by ID
    pub async fn get_page(&self, skip: u64, limit: u64) -> Result<Vec<ContractModel>, DbErr> {
        entity::prelude::Contract::find()
            .order_by_asc(entity::contract::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Gets all contracts ordered by ID
    pub async fn get_all(&self) -> Result<Vec<ContractModel>, DbErr> {
        entity::prelude::Contract::find()
            .order_by_asc(entity::contract::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces every writable field of a contract
    ///
    /// Returns `Ok(None)` if the contract does not exist.
    pub async fn update(
        &self,
        contract_id: i32,
        fields: ContractFields,
    ) -> Result<Option<ContractModel>, DbErr> {
        let contract = match entity::prelude::Contract::find_by_id(contract_id)
            .one(self.db)
            .await?
        {
            Some(contract) => contract,
            None => return Ok(None),
        };

        let mut contract_am = contract.into_active_model();
        contract_am.name = ActiveValue::Set(fields.name);
        contract_am.start_date = ActiveValue::Set(fields.start_date);
        contract_am.end_date = ActiveValue::Set(fields.end_date);
        contract_am.rate_type = ActiveValue::Set(fields.rate_type);
        contract_am.monthly_cap = ActiveValue::Set(fields.monthly_cap);
        contract_am.conditions = ActiveValue::Set(fields.conditions);
        contract_am.insurer_id = ActiveValue::Set(fields.insurer_id);

        let contract = contract_am.update(self.db).await?;

        Ok(Some(contract))
    }

    /// Deletes a single contract
    pub async fn delete(&self, contract_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Contract::delete_by_id(contract_id)
            .exec(self.db)
            .await
            .map(|result| result.rows_affected)
    }

    /// Deletes every contract of an insurer
    pub async fn delete_by_insurer_id(&self, insurer_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Contract::delete_many()
            .filter(entity::contract::Column::InsurerId.eq(insurer_id))
            .exec(self.db)
            .await
            .map(|result| result.rows_affected)
    }
}
