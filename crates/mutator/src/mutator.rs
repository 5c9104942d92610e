use key_path::KeyPath;
use serde_json::{Map, Value};

use crate::{EventSink, MissingKey, MutateError, Mutation, MutationEvent};

/// Applies add, replace and remove mutations to a document by key path,
/// reporting each step to an [`EventSink`].
#[derive(Debug)]
pub struct PathMutator<S> {
    sink: S,
}

impl<S: EventSink> PathMutator<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn apply(
        &mut self,
        root: &mut Value,
        path: &KeyPath,
        mutation: &Mutation,
    ) -> Result<(), MutateError> {
        match mutation {
            Mutation::Add { value } => self.apply_add(root, path, value.clone()),
            Mutation::Replace { value } => self.apply_replace(root, path, value.clone()),
            Mutation::Remove => self.apply_remove(root, path),
        }
    }

    fn apply_add(
        &mut self,
        root: &mut Value,
        path: &KeyPath,
        value: Value,
    ) -> Result<(), MutateError> {
        let (parents, key) = path.split_last();
        let mut current = root;

        for segment in parents {
            let obj = as_object(current, path, segment)?;
            if !obj.contains_key(segment) {
                self.sink.emit(MutationEvent::Created {
                    path: path.clone(),
                    key: segment.clone(),
                });
            }
            current = obj
                .entry(segment.as_str())
                .or_insert_with(|| Value::Object(Map::new()));
        }

        let obj = as_object(current, path, key)?;
        match obj.get_mut(key) {
            Some(slot) => self.replace_slot(slot, path, value),
            None => {
                self.sink.emit(MutationEvent::Added {
                    key: key.to_string(),
                    value: value.clone(),
                });
                obj.insert(key.to_string(), value);
            }
        }

        Ok(())
    }

    fn apply_replace(
        &mut self,
        root: &mut Value,
        path: &KeyPath,
        value: Value,
    ) -> Result<(), MutateError> {
        let (parents, key) = path.split_last();
        let mut current = root;

        for segment in parents {
            current = as_object(current, path, segment)?
                .get_mut(segment)
                .ok_or_else(|| MutateError::PathNotFound {
                    path: path.clone(),
                    missing: MissingKey::Parent(segment.clone()),
                })?;
        }

        let slot = as_object(current, path, key)?
            .get_mut(key)
            .ok_or_else(|| MutateError::PathNotFound {
                path: path.clone(),
                missing: MissingKey::Final(key.to_string()),
            })?;
        self.replace_slot(slot, path, value);

        Ok(())
    }

    fn apply_remove(&mut self, root: &mut Value, path: &KeyPath) -> Result<(), MutateError> {
        let (parents, key) = path.split_last();

        if parents.is_empty() {
            let obj = as_object(root, path, key)?;
            let event = match obj.shift_remove(key) {
                Some(_) => MutationEvent::Removed { path: path.clone() },
                None => MutationEvent::KeyNotFound {
                    key: key.to_string(),
                },
            };
            self.sink.emit(event);
            return Ok(());
        }

        let mut current = root;
        for segment in parents {
            match as_object(current, path, segment)?.get_mut(segment) {
                Some(next) => current = next,
                None => {
                    self.sink
                        .emit(MutationEvent::PathNotFound { path: path.clone() });
                    return Ok(());
                }
            }
        }

        let obj = as_object(current, path, key)?;
        let event = match obj.shift_remove(key) {
            Some(_) => MutationEvent::Removed { path: path.clone() },
            None => MutationEvent::FinalKeyNotFound {
                key: key.to_string(),
            },
        };
        self.sink.emit(event);

        Ok(())
    }

    fn replace_slot(&mut self, slot: &mut Value, path: &KeyPath, value: Value) {
        let old = std::mem::replace(slot, value);
        self.sink.emit(MutationEvent::Replaced {
            path: path.clone(),
            old,
            new: slot.clone(),
        });
    }
}

fn as_object<'a>(
    node: &'a mut Value,
    path: &KeyPath,
    key: &str,
) -> Result<&'a mut Map<String, Value>, MutateError> {
    match node {
        Value::Object(obj) => Ok(obj),
        _ => Err(MutateError::TypeMismatch {
            path: path.clone(),
            key: key.to_string(),
        }),
    }
}
