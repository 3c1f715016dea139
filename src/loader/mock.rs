#[cfg(test)]
use mockall::mock;

#[cfg(test)]
use crate::serial::Connection;

#[cfg(test)]
mock! {
    pub Serial{}

    impl Connection for Serial {
        fn send(&mut self, data: &[u8]) -> crate::serial::errors::Result<()>;
        fn drain(&mut self) -> crate::serial::errors::Result<Vec<u8>>;
    }
}
