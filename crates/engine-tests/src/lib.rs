#![allow(dead_code)]

pub mod utils;

#[cfg(test)]
mod integration;
