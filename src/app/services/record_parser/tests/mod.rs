//! Tests for observation row parsing

pub mod field_parser_tests;
pub mod parser_tests;

/// Build a full 16-field row around the columns the parser consumes
pub fn row(date: &str, hour: &str, name: &str, count: &str) -> String {
    format!("50810100,20001,{date},{hour},{name},1,12,千葉県,12211,成田市,{count},4,2.5,10.1,0.0,0.0")
}
