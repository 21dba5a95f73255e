//! Declarative helpers shared across the workspace.

mod ops;
