pub mod columns;
pub mod storage;
