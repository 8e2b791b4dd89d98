use crate::catalog::Catalog;
use crate::coverage::CoverageResolver;
use crate::storage::interface::ISessionStorage;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext<SS: ISessionStorage> {
    pub sessions: SS,
    pub catalog: Arc<Catalog>,
    pub resolver: CoverageResolver,
}
