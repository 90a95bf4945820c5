//! The crawl orchestrator.
//!
//! Sequences the retrieval stages in dependency order and owns the
//! top-level [`crawl`] entry point. Every stage is gated by the
//! [`InfoLevel`](super::InfoLevel) and relies on all earlier stages
//! having completed.

use crate::analyze;
use crate::filter;
use crate::schema::Catalog;
use crate::source::SourceConnection;

use super::error::CrawlResult;
use super::options::CrawlOptions;
use super::retriever::Retriever;

/// Crawl the database behind the connection and return the assembled
/// catalog.
///
/// Stage order: schemas → database info → data types → tables (columns →
/// keys → indexes → graph → reduce → extended) → routines → synonyms →
/// sequences → weak associations.
pub async fn crawl(conn: &SourceConnection, options: &CrawlOptions) -> CrawlResult<Catalog> {
    let mut retriever = Retriever::new(conn, options);

    crawl_schemas(&mut retriever).await?;
    crawl_database_info(&mut retriever).await?;
    crawl_data_types(&mut retriever).await?;
    crawl_tables(&mut retriever).await?;
    crawl_routines(&mut retriever).await?;
    retriever.retrieve_synonyms().await?;
    retriever.retrieve_sequences().await?;
    filter::reduce_synonyms(&mut retriever.catalog, &options.synonym_rule);
    filter::reduce_sequences(&mut retriever.catalog, &options.sequence_rule);

    let mut catalog = retriever.into_catalog();
    if options.info_level.infer_weak_associations {
        analyze::infer_weak_associations(&mut catalog);
    }

    tracing::info!(
        schemas = catalog.schemas.len(),
        tables = catalog.tables.len(),
        routines = catalog.routines.len(),
        "crawl complete"
    );
    Ok(catalog)
}

async fn crawl_schemas(retriever: &mut Retriever<'_>) -> CrawlResult<()> {
    retriever.retrieve_schemas().await
}

async fn crawl_database_info(retriever: &mut Retriever<'_>) -> CrawlResult<()> {
    if !retriever.options.info_level.retrieve_database_info {
        return Ok(());
    }
    retriever.retrieve_database_info().await
}

async fn crawl_data_types(retriever: &mut Retriever<'_>) -> CrawlResult<()> {
    let info_level = &retriever.options.info_level;
    if info_level.retrieve_column_data_types {
        retriever.retrieve_system_data_types().await?;
    }
    if info_level.retrieve_user_defined_types {
        retriever.retrieve_user_defined_types().await?;
    }
    Ok(())
}

async fn crawl_tables(retriever: &mut Retriever<'_>) -> CrawlResult<()> {
    let info_level = retriever.options.info_level.clone();
    if !info_level.retrieve_tables {
        return Ok(());
    }

    retriever.retrieve_tables().await?;

    if info_level.retrieve_table_columns {
        retriever.retrieve_columns().await?;
    }

    if !info_level.retrieve_foreign_keys {
        tracing::warn!(
            "foreign keys are not being retrieved, so tables cannot be sorted in natural order"
        );
    }

    if info_level.retrieve_primary_keys {
        retriever.retrieve_primary_keys().await?;
    }
    if info_level.retrieve_indexes {
        retriever.retrieve_indexes(true).await?;
        retriever.retrieve_indexes(false).await?;
        retriever.replace_primary_keys();
    }
    if info_level.retrieve_foreign_keys {
        retriever.retrieve_foreign_keys().await?;
    }

    analyze::assign_natural_sort_order(&mut retriever.catalog);

    // Filter the table list on grep criteria and parent-child
    // relationships, now that the whole graph is assembled.
    filter::reduce_tables(
        &mut retriever.catalog,
        &retriever.options.table_rule,
        &retriever.options.grep,
        retriever.options.parent_table_depth,
        retriever.options.child_table_depth,
    );

    if info_level.retrieve_check_constraints {
        retriever.retrieve_check_constraints().await?;
    }
    if info_level.retrieve_triggers {
        retriever.retrieve_triggers().await?;
    }
    if info_level.retrieve_view_definitions {
        retriever.retrieve_view_definitions().await?;
    }
    if info_level.retrieve_table_definitions {
        retriever.retrieve_table_definitions().await?;
    }
    if info_level.retrieve_table_privileges {
        retriever.retrieve_table_privileges().await?;
    }
    if info_level.retrieve_column_privileges {
        retriever.retrieve_column_privileges().await?;
    }
    Ok(())
}

async fn crawl_routines(retriever: &mut Retriever<'_>) -> CrawlResult<()> {
    let info_level = retriever.options.info_level.clone();
    if !info_level.retrieve_routines {
        return Ok(());
    }

    retriever.retrieve_routines().await?;
    if info_level.retrieve_routine_parameters {
        retriever.retrieve_routine_parameters().await?;
    }

    // Filter the routine list on grep criteria.
    filter::reduce_routines(
        &mut retriever.catalog,
        &retriever.options.routine_rule,
        &retriever.options.grep,
    );
    Ok(())
}
