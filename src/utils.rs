use kube::Resource;

/// Quoted, comma separated names of `resources`, for log lines
pub fn resource_names<T: Resource<DynamicType = ()>>(resources: &[T]) -> String {
    let words: Vec<String> = resources
        .iter()
        .map(|resource| match &resource.meta().name {
            Some(name) => format!("\"{}\"", name),
            None => "".into(),
        })
        .collect();
    words.join(", ")
}

pub fn plural_str(length: usize, word: &str, suffix: Option<String>) -> String {
    let result = if length == 1 {
        word.trim_end_matches('s')
    } else {
        word
    };
    match (suffix, length > 0) {
        (Some(suffix_str), true) => {
            let mut suffix_owned = suffix_str;
            suffix_owned.push_str(result);
            suffix_owned
        }
        (_, _) => result.to_string(),
    }
}
