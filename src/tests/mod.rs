//! Tests for the Crowdin API client.



#[cfg(test)]
mod serialization_tests;
