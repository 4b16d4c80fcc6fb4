/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Response envelope shared by every REST endpoint
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// `{"success": true, "result": ...}` wrapper around every FTX payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub result: T,
}

impl<T> ApiResponse<T> {
    pub fn into_result(self) -> T {
        self.result
    }
}
