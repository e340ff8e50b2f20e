//! ローカル検索
//!
//! 手元の一覧を検索クエリで絞り込む。

/// 検索クエリで一覧を絞り込む
///
/// - `query` が空なら全件返却
/// - `accessor` で取り出した文字列に対する case-insensitive な部分一致
/// - 元の並び順を保持する
pub fn local_search<'a, T, F>(items: &'a [T], query: &str, accessor: F) -> Vec<&'a T>
where
    F: Fn(&T) -> &str,
{
    if query.is_empty() {
        return items.iter().collect();
    }

    let query = query.to_lowercase();
    items
        .iter()
        .filter(|item| accessor(*item).to_lowercase().contains(&query))
        .collect()
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
