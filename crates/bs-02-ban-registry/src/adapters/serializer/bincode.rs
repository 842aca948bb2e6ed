use crate::domain::errors::SerializationError;
use crate::ports::outbound::RecordSerializer;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Default record serializer using bincode.
#[derive(Debug, Default, Clone, Copy)]
pub struct BincodeRecordSerializer;

impl RecordSerializer for BincodeRecordSerializer {
    fn serialize<T: Serialize>(&self, record: &T) -> Result<Vec<u8>, SerializationError> {
        bincode::serialize(record).map_err(|e| SerializationError {
            message: e.to_string(),
        })
    }

    fn deserialize<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, SerializationError> {
        bincode::deserialize(data).map_err(|e| SerializationError {
            message: e.to_string(),
        })
    }
}
