mod integration;
#[cfg(test)]
mod stubs;
