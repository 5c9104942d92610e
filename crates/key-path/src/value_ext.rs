use serde_json::Value;

use crate::KeyPath;

pub trait ValueExt {
    fn locate(&self, path: &KeyPath) -> Option<&Value>;
}

impl ValueExt for Value {
    fn locate(&self, path: &KeyPath) -> Option<&Value> {
        path.iter().try_fold(self, |acc, segment| match acc {
            Value::Object(obj) => obj.get(segment),
            _ => None,
        })
    }
}
