//! Shared fixtures for the accessor integration tests.

#![allow(dead_code)]

use pathlinq::describe_struct;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, Clone, Serialize)]
pub struct TestObject3 {
    #[serde(rename = "Name")]
    pub name: Option<String>,
}

impl Default for TestObject3 {
    fn default() -> Self {
        Self {
            name: Some("Test3".to_string()),
        }
    }
}

describe_struct!(default TestObject3 { "Name": Option<String> });

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestObject2 {
    #[serde(rename = "Type")]
    pub kind: Option<String>,
    #[serde(rename = "Status")]
    pub status: Option<String>,
    pub int_value: i32,
    pub bool_value: bool,
    pub decimal_value: f64,
    pub double_value: f64,
    #[serde(rename = "Nested")]
    pub nested: Option<TestObject3>,
}

impl Default for TestObject2 {
    fn default() -> Self {
        Self {
            kind: Some("Type1".to_string()),
            status: Some("Status1".to_string()),
            int_value: 7,
            bool_value: false,
            decimal_value: 18.4,
            double_value: 12.23,
            nested: None,
        }
    }
}

describe_struct!(default TestObject2 {
    "Type": Option<String>,
    "Status": Option<String>,
    "intValue": i32,
    "boolValue": bool,
    "decimalValue": f64,
    "doubleValue": f64,
    "Nested": Option<TestObject3>,
});

impl TestObject2 {
    pub fn listed(kind: &str, status: Option<&str>, nested: &str) -> Self {
        Self {
            kind: Some(kind.to_string()),
            status: status.map(str::to_string),
            nested: Some(TestObject3 {
                name: Some(nested.to_string()),
            }),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestObject {
    pub string_value: Option<String>,
    pub int_value: i32,
    pub bool_value: bool,
    pub decimal_value: f64,
    pub double_value: f64,
    pub sub_class: Option<TestObject2>,
    pub sub_class_list: Vec<TestObject2>,
    pub null_sub_class_list: Option<Vec<TestObject2>>,
    pub idictionary: HashMap<String, String>,
    pub dictionary: BTreeMap<String, String>,
}

impl Default for TestObject {
    fn default() -> Self {
        let entries = [
            ("key".to_string(), "value".to_string()),
            (
                "crossplane.io/external-name".to_string(),
                "value1".to_string(),
            ),
        ];
        Self {
            string_value: Some("TestString".to_string()),
            int_value: 7,
            bool_value: false,
            decimal_value: 18.4,
            double_value: 12.23,
            sub_class: Some(TestObject2::default()),
            sub_class_list: vec![
                TestObject2::listed("1", Some("Ready"), "Nested1"),
                TestObject2::listed("2", None, "Nested2"),
                TestObject2::listed("3", Some("Starting"), "Nested3"),
            ],
            null_sub_class_list: None,
            idictionary: entries.clone().into_iter().collect(),
            dictionary: entries.into_iter().collect(),
        }
    }
}

describe_struct!(TestObject {
    "stringValue": Option<String>,
    "intValue": i32,
    "boolValue": bool,
    "decimalValue": f64,
    "doubleValue": f64,
    "subClass": Option<TestObject2>,
    "subClassList": Vec<TestObject2>,
    "nullSubClassList": Option<Vec<TestObject2>>,
    "idictionary": HashMap<String, String>,
    "dictionary": BTreeMap<String, String>,
});

#[derive(Debug, Clone, Serialize)]
pub struct CollectionObject {
    #[serde(rename = "String")]
    pub string: Option<String>,
}

describe_struct!(CollectionObject { "String": Option<String> });

#[derive(Debug, Clone, Serialize)]
pub struct NestedObject {
    #[serde(rename = "String")]
    pub string: Option<String>,
    #[serde(rename = "Strings")]
    pub strings: Option<Vec<CollectionObject>>,
}

describe_struct!(NestedObject {
    "String": Option<String>,
    "Strings": Option<Vec<CollectionObject>>,
});

#[derive(Debug, Clone, Serialize)]
pub struct NullSortTestObject {
    #[serde(rename = "Nested")]
    pub nested: Option<NestedObject>,
}

describe_struct!(NullSortTestObject { "Nested": Option<NestedObject> });

/// Three rows: a fully populated one, one without `Strings`, and one without `Nested`.
pub fn null_sort_rows() -> Vec<NullSortTestObject> {
    vec![
        NullSortTestObject {
            nested: Some(NestedObject {
                string: Some("one".to_string()),
                strings: Some(vec![CollectionObject {
                    string: Some("coll1".to_string()),
                }]),
            }),
        },
        NullSortTestObject {
            nested: Some(NestedObject {
                string: Some("two".to_string()),
                strings: None,
            }),
        },
        NullSortTestObject { nested: None },
    ]
}
