use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    LoaderTrait, QueryOrder, QuerySelect,
};

use crate::server::model::db::{ContractModel, InsurerModel};

pub struct InsurerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InsurerRepository<'a, C> {
    /// Creates a new instance of [`InsurerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new insurer
    ///
    /// Fails with a unique constraint violation if the name is already taken.
    pub async fn create(
        &self,
        name: String,
        tax_id: String,
        contact: String,
    ) -> Result<InsurerModel, DbErr> {
        let insurer = entity::insurer::ActiveModel {
            name: ActiveValue::Set(name),
            tax_id: ActiveValue::Set(tax_id),
            contact: ActiveValue::Set(contact),
            ..Default::default()
        };

        insurer.insert(self.db).await
    }

    pub async fn get_by_id(&self, insurer_id: i32) -> Result<Option<InsurerModel>, DbErr> {
        entity::prelude::Insurer::find_by_id(insurer_id)
            .one(self.db)
            .await
    }

    /// Gets an insurer together with its contracts ordered by ID
    pub async fn get_with_contracts(
        &self,
        insurer_id: i32,
    ) -> Result<Option<(InsurerModel, Vec<ContractModel>)>, DbErr> {
        let Some(insurer) = self.get_by_id(insurer_id).await? else {
            return Ok(None);
        };

        let mut page = self.load_contracts(vec![insurer]).await?;

        Ok(page.pop())
    }

    /// Gets a page of insurers ordered by ID, each with its contracts
    ///
    /// # Arguments
    /// - `skip` (`u64`): Number of insurers to skip
    /// - `limit` (`u64`): Maximum number of insurers to return
    pub async fn get_page(
        &self,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<(InsurerModel, Vec<ContractModel>)>, DbErr> {
        let insurers = entity::prelude::Insurer::find()
            .order_by_asc(entity::insurer::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(self.db)
            .await?;

        self.load_contracts(insurers).await
    }

    /// Gets all insurers ordered by ID
    pub async fn get_all(&self) -> Result<Vec<InsurerModel>, DbErr> {
        entity::prelude::Insurer::find()
            .order_by_asc(entity::insurer::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces every writable field of an insurer
    ///
    /// Returns `Ok(None)` if the insurer does not exist.
    pub async fn update(
        &self,
        insurer_id: i32,
        name: String,
        tax_id: String,
        contact: String,
    ) -> Result<Option<InsurerModel>, DbErr> {
        let insurer = match entity::prelude::Insurer::find_by_id(insurer_id)
            .one(self.db)
            .await?
        {
            Some(insurer) => insurer,
            None => return Ok(None),
        };

        let mut insurer_am = insurer.into_active_model();
        insurer_am.name = ActiveValue::Set(name);
        insurer_am.tax_id = ActiveValue::Set(tax_id);
        insurer_am.contact = ActiveValue::Set(contact);

        let insurer = insurer_am.update(self.db).await?;

        Ok(Some(insurer))
    }

    /// Deletes an insurer row
    ///
    /// Returns the number of rows removed, `0` if the insurer does not exist.
    pub async fn delete(&self, insurer_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Insurer::delete_by_id(insurer_id)
            .exec(self.db)
            .await
            .map(|result| result.rows_affected)
    }

    async fn load_contracts(
        &self,
        insurers: Vec<InsurerModel>,
    ) -> Result<Vec<(InsurerModel, Vec<ContractModel>)>, DbErr> {
        let contracts = insurers
            .load_many(entity::prelude::Contract, self.db)
            .await?;

        Ok(insurers
            .into_iter()
            .zip(contracts)
            .map(|(insurer, mut contracts)| {
                contracts.sort_by_key(|c| c.id);
                (insurer, contracts)
            })
            .collect())
    }
}
