//! LockfileRepository port - persistence for the deploy lockfile

use std::path::Path;

use crate::domain::entities::DeployLock;
use crate::error::PackResult;

/// Abstract repository for deploy lockfile persistence
pub trait LockfileRepository {
    /// Load lockfile from path, or an empty one if it does not exist
    fn load(&self, path: &Path) -> PackResult<DeployLock>;

    /// Save lockfile to path
    fn save(&self, lock: &DeployLock, path: &Path) -> PackResult<()>;
}
