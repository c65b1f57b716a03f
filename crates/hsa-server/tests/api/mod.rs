//! Auth API endpoint tests
