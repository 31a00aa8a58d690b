pub mod selection_dto;
