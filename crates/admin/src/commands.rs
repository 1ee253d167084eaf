//! Command handlers. Each writes its result as JSON to `out` and returns the
//! process exit status.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use catalog_client::{CatalogClient, ProductSink, SubmitGate, SubmitOutcome, Updated, submit_form};
use catalog_core::{BrandId, ProductCode, TypeId};
use catalog_products::{VariantForm, VariantRecord, filter_by_name};

use crate::cli::{ProductAction, TaxonomyAction};

pub const EXIT_OK: u8 = 0;
/// The draft failed validation; the keyed errors were written to `out`.
pub const EXIT_INVALID: u8 = 2;

pub async fn product_types(
    client: &CatalogClient,
    action: TaxonomyAction,
    out: &mut impl Write,
) -> Result<u8> {
    match action {
        TaxonomyAction::List { keyword, search } => {
            let all = client.list_product_types(&keyword).await?;
            write_json(out, &filter_by_name(&all, search.as_deref().unwrap_or_default()))?;
        }
        TaxonomyAction::Create { name } => {
            let created = client.create_product_type(&name).await?;
            tracing::info!(id = %created.id, "product type created");
            write_json(out, &created)?;
        }
        TaxonomyAction::Update { id, name } => {
            match client.update_product_type(TypeId::new(id), &name).await? {
                Updated::Entity(updated) => write_json(out, &updated)?,
                Updated::NoContent => write_json(out, &client.list_product_types("").await?)?,
            }
            tracing::info!(%id, "product type updated");
        }
        TaxonomyAction::Delete { id } => {
            client.delete_product_type(TypeId::new(id)).await?;
            tracing::info!(%id, "product type deleted");
        }
    }
    Ok(EXIT_OK)
}

pub async fn brands(
    client: &CatalogClient,
    action: TaxonomyAction,
    out: &mut impl Write,
) -> Result<u8> {
    match action {
        TaxonomyAction::List { keyword, search } => {
            let all = client.list_brands(&keyword).await?;
            write_json(out, &filter_by_name(&all, search.as_deref().unwrap_or_default()))?;
        }
        TaxonomyAction::Create { name } => {
            let created = client.create_brand(&name).await?;
            tracing::info!(id = %created.id, "brand created");
            write_json(out, &created)?;
        }
        TaxonomyAction::Update { id, name } => {
            match client.update_brand(BrandId::new(id), &name).await? {
                Updated::Entity(updated) => write_json(out, &updated)?,
                Updated::NoContent => write_json(out, &client.list_brands("").await?)?,
            }
            tracing::info!(%id, "brand updated");
        }
        TaxonomyAction::Delete { id } => {
            client.delete_brand(BrandId::new(id)).await?;
            tracing::info!(%id, "brand deleted");
        }
    }
    Ok(EXIT_OK)
}

pub async fn product<S: ProductSink + ?Sized>(
    sink: &S,
    gate: &SubmitGate,
    action: ProductAction,
    out: &mut impl Write,
) -> Result<u8> {
    match action {
        ProductAction::Init { id, records } => {
            let id: ProductCode = id.parse()?;
            let records: Vec<VariantRecord> = match records {
                Some(path) => read_json(&path)?,
                None => Vec::new(),
            };
            write_json(out, &VariantForm::initialize(id, &records))?;
            Ok(EXIT_OK)
        }
        ProductAction::Edit { draft, dry_run } => {
            let form: VariantForm = read_json(&draft)?;
            if dry_run {
                return Ok(match form.build_submission() {
                    Ok(request) => {
                        write_json(out, &request.to_items())?;
                        EXIT_OK
                    }
                    Err(errors) => {
                        write_json(out, &errors)?;
                        EXIT_INVALID
                    }
                });
            }

            match submit_form(sink, &form, gate).await {
                SubmitOutcome::Submitted(request) => {
                    write_json(out, &request.to_items())?;
                    Ok(EXIT_OK)
                }
                SubmitOutcome::Invalid(errors) => {
                    write_json(out, &errors)?;
                    Ok(EXIT_INVALID)
                }
                SubmitOutcome::Busy => anyhow::bail!("a submission is already in progress"),
                SubmitOutcome::Failed(notice) => anyhow::bail!(notice.message),
            }
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("{} is not valid JSON", path.display()))
}

fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
