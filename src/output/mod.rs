mod json;

pub(crate) use json::export;
