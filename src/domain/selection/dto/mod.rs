pub mod log_tail_request;
pub mod pod_list_request;
pub mod resource_names;
