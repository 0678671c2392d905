//! Integration Tests Module
//!
//! End-to-end tests for the LINE Notify block extension: registration
//! metadata and gallery descriptor shape, locale resolution, and the
//! dispatch properties (containment, timeout settling, overlapping
//! invocations).

// Shared recording mocks for the collaborator seams
mod support;


// Descriptor, metadata, and locale registration tests
mod registration_test;
