#![warn(clippy::pedantic)]

pub mod local_storage;
pub mod rest;

#[cfg(test)]
mod tests {
    pub mod data;
}
