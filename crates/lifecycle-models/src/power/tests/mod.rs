mod test_host;
mod test_memory;
mod test_storage;
