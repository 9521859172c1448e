//! Notification and webhook-refresh contracts
//!
//! Both sinks are fire-and-forget: delivery, ordering, and filtering are the
//! receiving subsystem's responsibility, so the methods return nothing.

use tracing::info;

use slipway_core::payload::{CreatePayload, PushPayload};
use slipway_core::types::{Release, User};

/// Sink for release lifecycle events and webhook payloads
pub trait Notifier: Send + Sync {
    fn new_release(&self, rel: &Release);
    fn update_release(&self, doer: &User, rel: &Release);
    fn delete_release(&self, doer: &User, rel: &Release);
    /// A ref (tag) was created
    fn create_ref(&self, payload: CreatePayload);
    /// A push materialized the ref
    fn push(&self, payload: PushPayload);
}

/// Queue of repositories whose webhook caches need refreshing
pub trait HookQueue: Send + Sync {
    fn add(&self, repo_id: i64);
}

/// Notifier that only logs events
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn new_release(&self, rel: &Release) {
        info!(release_id = rel.id, tag = %rel.tag_name, "new release");
    }

    fn update_release(&self, doer: &User, rel: &Release) {
        info!(release_id = rel.id, tag = %rel.tag_name, doer = %doer.username, "release updated");
    }

    fn delete_release(&self, doer: &User, rel: &Release) {
        info!(release_id = rel.id, tag = %rel.tag_name, doer = %doer.username, "release deleted");
    }

    fn create_ref(&self, payload: CreatePayload) {
        info!(ref_name = %payload.ref_name, sha = %payload.sha, "ref created");
    }

    fn push(&self, payload: PushPayload) {
        info!(ref_name = %payload.ref_name, after = %payload.after, "ref pushed");
    }
}

/// Hook queue that only logs enqueued repositories
#[derive(Debug, Default)]
pub struct LogHookQueue;

impl HookQueue for LogHookQueue {
    fn add(&self, repo_id: i64) {
        info!(repo_id, "queued webhook cache refresh");
    }
}
