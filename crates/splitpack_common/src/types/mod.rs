pub mod entry_point;
pub mod import_kind;
pub mod import_record;
pub mod manifest;
pub mod module_type;
pub mod output_chunk;
pub mod raw_idx;
pub mod resolved_id;
