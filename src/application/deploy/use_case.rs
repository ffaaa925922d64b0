//! Deploy Use Case
//!
//! Orchestrates the deployment flow:
//! 1. Bundle the source directory
//! 2. Package the bundle into a content-addressed archive
//! 3. Derive the versioned object key
//! 4. Compose and write the deployment manifest
//! 5. Publish the archive (when a store is configured)
//! 6. Record the deploy in the lockfile
//!
//! Each step only starts once the previous one succeeded; the first failure
//! ends the run.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::application::pipeline::AssetPipeline;
use crate::domain::entities::{DeployRecord, DeploymentManifest};
use crate::domain::ports::{
    Bundler, LockfileRepository, NoopEventSink, ObjectStore, Packager, PipelineEvent,
    PipelineEventSink, PutOutcome,
};
use crate::error::PackResult;
use crate::infrastructure::fs::atomic_write;
use crate::infrastructure::TomlLockfileRepository;

use super::options::DeployOptions;
use super::result::DeployResult;

/// Deploy use case, parameterized by its ports
pub struct DeployUseCase<B, P, LR>
where
    B: Bundler,
    P: Packager,
    LR: LockfileRepository,
{
    pipeline: AssetPipeline<B, P>,
    lockfile_repo: LR,
    store: Option<Box<dyn ObjectStore>>,
}

impl<B, P, LR> DeployUseCase<B, P, LR>
where
    B: Bundler,
    P: Packager,
    LR: LockfileRepository,
{
    pub fn new(bundler: B, packager: P, lockfile_repo: LR) -> Self {
        Self {
            pipeline: AssetPipeline::new(bundler, packager),
            lockfile_repo,
            store: None,
        }
    }

    pub fn with_store(mut self, store: Box<dyn ObjectStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn execute(&self, options: &DeployOptions) -> PackResult<DeployResult> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    pub fn execute_with_events(
        &self,
        options: &DeployOptions,
        events: Arc<dyn PipelineEventSink>,
    ) -> PackResult<DeployResult> {
        let version = &options.deployment.version;
        events.on_event(PipelineEvent::Started {
            working_dir: options.deployment.source_path.clone(),
            version: version.to_string(),
        });

        let artifact = self.pipeline.bundle(&options.request)?;
        events.on_event(PipelineEvent::Bundled {
            output_dir: artifact.output_directory().to_path_buf(),
        });

        let archive = self.pipeline.package(artifact.output_directory())?;
        events.on_event(PipelineEvent::Packaged {
            file_name: archive.file_name().to_string(),
            hash: archive.hash().to_string(),
            content_path: archive.content_path().to_path_buf(),
        });

        let object_key = archive.object_key(version);
        events.on_event(PipelineEvent::Keyed {
            object_key: object_key.to_string(),
        });

        let manifest =
            DeploymentManifest::compose(&options.stack, &archive, &object_key, &options.handler);

        let lock_path = options.staging_dir.join(TomlLockfileRepository::FILE_NAME);
        let lock = self.lockfile_repo.load(&lock_path)?;
        let lock_unchanged = lock.is_unchanged(&options.stack.stack, &object_key, archive.hash());

        if options.dry_run {
            debug!(key = %object_key, "dry run, nothing written");
            events.on_event(PipelineEvent::Completed {
                object_key: object_key.to_string(),
                hash: archive.hash().to_string(),
                unchanged: lock_unchanged,
                dry_run: true,
            });
            return Ok(DeployResult {
                artifact,
                archive,
                object_key,
                manifest,
                manifest_path: None,
                published: None,
                unchanged: lock_unchanged,
                dry_run: true,
            });
        }

        let manifest_path = options.manifest_path();
        atomic_write(&manifest_path, manifest.to_json_pretty()?.as_bytes())?;
        events.on_event(PipelineEvent::ManifestWritten {
            path: manifest_path.clone(),
        });

        let published = match &self.store {
            Some(store) => {
                let bucket = &options.stack.bucket_prefix;
                let outcome = store.put(bucket, &object_key, archive.content_path())?;
                let location = store.location(bucket, &object_key);
                events.on_event(PipelineEvent::Published {
                    location: location.clone(),
                    uploaded: outcome == PutOutcome::Uploaded,
                });
                Some((location, outcome))
            }
            None => None,
        };

        // A fresh upload is a change even when the lockfile already knows the key.
        let unchanged = lock_unchanged
            && !matches!(&published, Some((_, PutOutcome::Uploaded)));

        if !lock_unchanged {
            let mut lock = lock;
            let record = DeployRecord::new(&object_key, archive.hash())
                .with_deployed_at(Utc::now().to_rfc3339());
            lock.set(options.stack.stack.clone(), record);
            self.lockfile_repo.save(&lock, &lock_path)?;
        }

        info!(key = %object_key, hash = %archive.hash(), unchanged, "deploy ready");
        events.on_event(PipelineEvent::Completed {
            object_key: object_key.to_string(),
            hash: archive.hash().to_string(),
            unchanged,
            dry_run: false,
        });

        Ok(DeployResult {
            artifact,
            archive,
            object_key,
            manifest,
            manifest_path: Some(manifest_path),
            published,
            unchanged,
            dry_run: false,
        })
    }
}
