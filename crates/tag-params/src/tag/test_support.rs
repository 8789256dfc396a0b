//! Test helpers for asserting parse outcomes.
use crate::errors::ParseError;
use crate::param::Param;

pub(crate) fn parse_ok(tag: &str) -> Vec<Param> {
    match super::parse(tag) {
        Ok(Some(params)) => params,
        Ok(None) => panic!("tag should not be treated as absent: {tag}"),
        Err(err) => panic!("tag should parse: {err}"),
    }
}

pub(crate) fn parse_err(tag: &str) -> ParseError {
    match super::parse(tag) {
        Ok(_) => panic!("tag parsing should fail: {tag}"),
        Err(err) => err,
    }
}
