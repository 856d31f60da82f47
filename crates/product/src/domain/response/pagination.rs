use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub size: i64,
    pub number: i64,
    pub total_elements: i64,
    pub total_pages: i64,
}

impl PageMetadata {
    pub fn new(number: i64, size: i64, total_elements: i64) -> Self {
        let total_pages = if size > 0 {
            total_elements / size + i64::from(total_elements % size != 0)
        } else {
            0
        };

        Self {
            size,
            number,
            total_elements,
            total_pages,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub page: PageMetadata,
}

impl<T> PageResponse<T> {
    pub fn new(content: Vec<T>, number: i64, size: i64, total_elements: i64) -> Self {
        Self {
            content,
            page: PageMetadata::new(number, size, total_elements),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(PageMetadata::new(0, 10, 0).total_pages, 0);
        assert_eq!(PageMetadata::new(0, 10, 10).total_pages, 1);
        assert_eq!(PageMetadata::new(0, 10, 11).total_pages, 2);
        assert_eq!(PageMetadata::new(2, 1, 3).total_pages, 3);
    }

    #[test]
    fn total_pages_with_maximal_size() {
        assert_eq!(PageMetadata::new(0, i64::MAX, 2).total_pages, 1);
        assert_eq!(PageMetadata::new(0, i64::MAX, 0).total_pages, 0);
        assert_eq!(PageMetadata::new(0, 1, i64::MAX).total_pages, i64::MAX);
    }

    #[test]
    fn metadata_uses_camel_case() {
        let page: PageResponse<i32> = PageResponse::new(vec![1, 2], 0, 10, 2);
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["page"]["totalElements"], 2);
        assert_eq!(value["page"]["totalPages"], 1);
        assert_eq!(value["page"]["number"], 0);
        assert_eq!(value["content"].as_array().map(Vec::len), Some(2));
    }
}
