#![no_std]

pub mod operator;
