//! Infrastructure adapters

mod reqwest_document_api;

pub use reqwest_document_api::ReqwestDocumentApi;
