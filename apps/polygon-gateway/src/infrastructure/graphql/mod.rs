//! GraphQL Schema
//!
//! One resolver per upstream endpoint, grouped into four section objects
//! under the query root: `stocks`, `options`, `forex`, and `crypto`.
//! Resolvers validate their arguments, call the `MarketDataApi` port,
//! and convert the wire response into the output types.
//!
//! Failures surface as field-level errors: a query that fans out over
//! several fields returns data for the fields that succeeded alongside
//! an `errors` entry for each field that did not.

use std::sync::Arc;

use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Result, Schema};

use crate::application::ports::MarketDataApi;

/// Crypto section resolvers.
pub mod crypto;
/// Field-level error mapping and extension codes.
pub mod errors;
/// Forex section resolvers.
pub mod forex;
/// Options section resolvers.
pub mod options;
/// Stocks section resolvers.
pub mod stocks;
/// Output object types.
pub mod types;

use crypto::CryptoQuery;
use forex::ForexQuery;
use options::OptionsQuery;
use stocks::StocksQuery;

/// The executable gateway schema.
pub type GatewaySchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Root query object grouping the four market sections.
#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Stock market queries.
    async fn stocks(&self) -> StocksQuery {
        StocksQuery
    }

    /// Options market queries.
    async fn options(&self) -> OptionsQuery {
        OptionsQuery
    }

    /// Forex market queries.
    async fn forex(&self) -> ForexQuery {
        ForexQuery
    }

    /// Crypto market queries.
    async fn crypto(&self) -> CryptoQuery {
        CryptoQuery
    }
}

/// Build the schema with the given market data port.
pub fn build_schema(api: Arc<dyn MarketDataApi>) -> GatewaySchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(api)
        .finish()
}

/// Fetch the market data port from the resolver context.
fn market_data<'a>(ctx: &Context<'a>) -> Result<&'a Arc<dyn MarketDataApi>> {
    ctx.data::<Arc<dyn MarketDataApi>>()
}
