//! SQL for the incidents table.

pub mod incident_crud;
pub mod vector_search;
