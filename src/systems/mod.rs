pub(crate) mod requests;
