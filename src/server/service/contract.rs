use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::insurer::{ContractDto, ContractInputDto},
    server::{
        data::{
            contract::{ContractFields, ContractRepository},
            insurer::InsurerRepository,
        },
        error::{store::StoreError, Error},
        model::page::Pagination,
        service::cache::DatasetCache,
        util::validation::{require_date_order, require_non_blank, require_non_negative},
    },
};

const ENTITY: &str = "contract";

pub struct ContractService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a DatasetCache,
}

impl<'a> ContractService<'a> {
    /// Creates a new instance of [`ContractService`]
    pub fn new(db: &'a DatabaseConnection, cache: &'a DatasetCache) -> Self {
        Self { db, cache }
    }

    /// Creates a contract for an existing insurer
    pub async fn create(&self, input: ContractInputDto) -> Result<ContractDto, Error> {
        let fields = validate(input)?;

        let txn = self.db.begin().await?;
        if InsurerRepository::new(&txn)
            .get_by_id(fields.insurer_id)
            .await?
            .is_none()
        {
            return Err(StoreError::ParentNotFound {
                entity: "insurer",
                id: fields.insurer_id,
            }
            .into());
        }

        let contract = ContractRepository::new(&txn).create(fields).await?;
        txn.commit().await?;
        self.cache.invalidate().await;

        tracing::info!(
            "Created contract {} {:?} for insurer {}",
            contract.id,
            contract.name,
            contract.insurer_id
        );

        Ok(contract.into())
    }

    pub async fn get(&self, contract_id: i32) -> Result<ContractDto, Error> {
        ContractRepository::new(self.db)
            .get_by_id(contract_id)
            .await?
            .map(ContractDto::from)
            .ok_or_else(|| {
                StoreError::NotFound {
                    entity: ENTITY,
                    id: contract_id,
                }
                .into()
            })
    }

    /// Lists a page of contracts ordered by ID
    ///
    /// `limit` is capped at [`MAX_PAGE_LIMIT`](crate::server::model::page::MAX_PAGE_LIMIT);
    /// a `skip` beyond `i64::MAX` is a validation error.
    pub async fn list(&self, page: Pagination) -> Result<Vec<ContractDto>, Error> {
        let page = page.bounded()?;
        let contracts = ContractRepository::new(self.db)
            .get_page(page.skip, page.limit)
            .await?;

        Ok(contracts.into_iter().map(ContractDto::from).collect())
    }

    /// Replaces every writable field of a contract
    pub async fn update(
        &self,
        contract_id: i32,
        input: ContractInputDto,
    ) -> Result<ContractDto, Error> {
        let fields = validate(input)?;

        let txn = self.db.begin().await?;
        if InsurerRepository::new(&txn)
            .get_by_id(fields.insurer_id)
            .await?
            .is_none()
        {
            return Err(StoreError::ParentNotFound {
                entity: "insurer",
                id: fields.insurer_id,
            }
            .into());
        }

        let contract = ContractRepository::new(&txn)
            .update(contract_id, fields)
            .await?
            .ok_or(StoreError::NotFound {
                entity: ENTITY,
                id: contract_id,
            })?;
        txn.commit().await?;
        self.cache.invalidate().await;

        tracing::info!("Updated contract {} {:?}", contract.id, contract.name);

        Ok(contract.into())
    }
}

fn validate(input: ContractInputDto) -> Result<ContractFields, StoreError> {
    let name = require_non_blank("nombre", &input.name)?;
    let rate_type = require_non_blank("tipo_tarifa", &input.rate_type)?;
    let monthly_cap = require_non_negative("techo_mensual", input.monthly_cap)?;
    require_date_order("fecha_fin", input.start_date, input.end_date)?;

    // Blank conditions are stored as absent
    let conditions = input.conditions.filter(|c| !c.trim().is_empty());

    Ok(ContractFields {
        name,
        start_date: input.start_date,
        end_date: input.end_date,
        rate_type,
        monthly_cap,
        conditions,
        insurer_id: input.insurer_id,
    })
}
