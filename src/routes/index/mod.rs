pub mod index_handlers;
