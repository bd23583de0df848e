use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::insurer::{InsurerDto, InsurerInputDto},
    server::{
        data::insurer::InsurerRepository,
        error::{store::StoreError, Error},
        model::{db::insurer_dto, page::Pagination},
        service::cache::DatasetCache,
        util::validation::require_non_blank,
    },
};

const ENTITY: &str = "insurer";

pub struct InsurerService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a DatasetCache,
}

impl<'a> InsurerService<'a> {
    /// Creates a new instance of [`InsurerService`]
    pub fn new(db: &'a DatabaseConnection, cache: &'a DatasetCache) -> Self {
        Self { db, cache }
    }

    /// Creates an insurer with no contracts
    ///
    /// # Returns
    /// - `Ok(InsurerDto)` - The stored insurer
    /// - `Err(Error::StoreError)` - A blank field, or the name is already taken
    pub async fn create(&self, input: InsurerInputDto) -> Result<InsurerDto, Error> {
        let name = require_non_blank("nombre", &input.name)?;
        let tax_id = require_non_blank("nit", &input.tax_id)?;
        let contact = require_non_blank("contacto", &input.contact)?;

        let txn = self.db.begin().await?;
        let insurer = InsurerRepository::new(&txn)
            .create(name.clone(), tax_id, contact)
            .await
            .map_err(|e| StoreError::from_unique_violation(e, ENTITY, &name))?;
        txn.commit().await?;
        self.cache.invalidate().await;

        tracing::info!("Created insurer {} {:?}", insurer.id, insurer.name);

        Ok(insurer_dto(insurer, Vec::new()))
    }

    /// Gets an insurer with its contracts
    pub async fn get(&self, insurer_id: i32) -> Result<InsurerDto, Error> {
        let (insurer, contracts) = InsurerRepository::new(self.db)
            .get_with_contracts(insurer_id)
            .await?
            .ok_or(StoreError::NotFound {
                entity: ENTITY,
                id: insurer_id,
            })?;

        Ok(insurer_dto(insurer, contracts))
    }

    /// Lists a page of insurers ordered by ID, each with its contracts
    ///
    /// `limit` is capped at [`MAX_PAGE_LIMIT`](crate::server::model::page::MAX_PAGE_LIMIT);
    /// a `skip` beyond `i64::MAX` is a validation error.
    pub async fn list(&self, page: Pagination) -> Result<Vec<InsurerDto>, Error> {
        let page = page.bounded()?;
        let insurers = InsurerRepository::new(self.db)
            .get_page(page.skip, page.limit)
            .await?;

        Ok(insurers
            .into_iter()
            .map(|(insurer, contracts)| insurer_dto(insurer, contracts))
            .collect())
    }

    /// Replaces every writable field of an insurer
    pub async fn update(
        &self,
        insurer_id: i32,
        input: InsurerInputDto,
    ) -> Result<InsurerDto, Error> {
        let name = require_non_blank("nombre", &input.name)?;
        let tax_id = require_non_blank("nit", &input.tax_id)?;
        let contact = require_non_blank("contacto", &input.contact)?;

        let txn = self.db.begin().await?;
        let insurer_repo = InsurerRepository::new(&txn);
        insurer_repo
            .update(insurer_id, name.clone(), tax_id, contact)
            .await
            .map_err(|e| StoreError::from_unique_violation(e, ENTITY, &name))?
            .ok_or(StoreError::NotFound {
                entity: ENTITY,
                id: insurer_id,
            })?;
        let (insurer, contracts) = insurer_repo
            .get_with_contracts(insurer_id)
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Insurer {} vanished during its own update transaction",
                    insurer_id
                ))
            })?;
        txn.commit().await?;
        self.cache.invalidate().await;

        tracing::info!("Updated insurer {} {:?}", insurer.id, insurer.name);

        Ok(insurer_dto(insurer, contracts))
    }
}
