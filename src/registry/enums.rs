pub mod registry_request;
