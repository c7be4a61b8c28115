//! Kubernetes adapters
//!
//! [`KubeConnectionResolver`] turns kubeconfig contexts into
//! [`KubeConnection`]s, which list and project resources through the
//! per-kind projectors in [`projection`].

mod connection;
pub mod projection;
mod resolver;

pub use connection::KubeConnection;
pub use resolver::KubeConnectionResolver;
