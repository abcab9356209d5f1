//! Tests for capture store loading

pub mod reader_tests;

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write a capture store file into a temp directory and return its path
pub fn write_store_file(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("captures.csv");
    fs::write(&path, content).unwrap();
    path
}

/// A small well-formed capture store file
pub fn sample_store_content() -> &'static str {
    "part_number,sequence,length_in,depth_in,height_in,weight_lb,time_stamp\n\
     WIDGET-42,1,10.0,5.0,2.0,3.0,20240115_103000\n\
     WIDGET-42,2,10.1,5.1,2.1,3.1,20240115_104500\n\
     ANCHOR-7,1,,,,1.25,\n"
}
