//! Test Module
//!
//! Cross-module test suite for the ScriptSmith core.
//!
//! ## Test Categories
//! - `brain_tests`: keyword extraction, category flags, topic synthesis, rendering scenarios
//! - `store_tests`: project CRUD, ordering, quota and corrupt-collection handling
//! - `workflow_tests`: input guards and full suggest/generate/save/load/export flows
