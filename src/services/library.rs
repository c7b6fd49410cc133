//! 照片库会话
//!
//! 所有图变更的唯一入口：持有加载好的 User 聚合和它的存储，
//! 每次成功变更后立即整体回写快照。回写是尽力而为的——失败
//! 只记录日志，不中断用户流程（可用性优先于持久性）。
//!
//! 同一个快照上同时打开两个会话时没有任何锁或合并策略，
//! 后保存者覆盖先保存者（last-writer-wins）。这是沿用的已知
//! 设计限制，不是待修复的缺陷。

use crate::models::{Photo, Tag, User};
use crate::paths::PathProvider;
use crate::resolver::SharedResourceResolver;
use crate::services::search::{self, TagQuery};
use crate::store::UserStore;
use crate::utils::error::{AppError, AppResult};

/// 照片库会话
pub struct Library {
    store: UserStore,
    resolver: SharedResourceResolver,
    user: User,
}

impl Library {
    /// 打开照片库：从存储加载用户聚合
    pub fn open(
        provider: &dyn PathProvider,
        resolver: SharedResourceResolver,
    ) -> AppResult<Self> {
        let store = UserStore::new(provider)?;
        Ok(Self::with_store(store, resolver))
    }

    /// 使用已有存储打开照片库
    pub fn with_store(store: UserStore, resolver: SharedResourceResolver) -> Self {
        let user = store.load();
        Self {
            store,
            resolver,
            user,
        }
    }

    /// 当前用户聚合（只读）
    pub fn user(&self) -> &User {
        &self.user
    }

    /// 全部相册名（按创建顺序）
    pub fn album_names(&self) -> Vec<String> {
        self.user.albums.iter().map(|a| a.name.clone()).collect()
    }

    /// 相册内全部照片定位符（按添加顺序）
    pub fn photo_locators(&self, album: &str) -> AppResult<Vec<String>> {
        let album = self
            .user
            .album_by_name(album)
            .ok_or_else(|| AppError::AlbumNotFound(album.to_string()))?;
        Ok(album.photos.iter().map(|p| p.locator.clone()).collect())
    }

    /// 照片的全部标签（按插入顺序）
    pub fn photo_tags(&self, album: &str, locator: &str) -> AppResult<Vec<Tag>> {
        let album_ref = self
            .user
            .album_by_name(album)
            .ok_or_else(|| AppError::AlbumNotFound(album.to_string()))?;
        let photo = album_ref
            .photo_by_locator(locator)
            .ok_or_else(|| AppError::PhotoNotFound(locator.to_string()))?;
        Ok(photo.tags.clone())
    }

    // ==================== 相册操作 ====================

    /// 创建相册
    ///
    /// 同名相册（不区分大小写）已存在时返回 `DuplicateAlbumName`。
    pub fn create_album(&mut self, name: &str) -> AppResult<()> {
        self.user.add_album(name)?;
        self.persist();
        Ok(())
    }

    /// 重命名相册
    ///
    /// 唯一性检查只针对*其它*相册。
    pub fn rename_album(&mut self, name: &str, new_name: &str) -> AppResult<()> {
        self.user.rename_album(name, new_name)?;
        self.persist();
        Ok(())
    }

    /// 删除相册
    ///
    /// 级联删除全部照片。相册不存在时为无操作，返回 `false`。
    pub fn delete_album(&mut self, name: &str) -> bool {
        let removed = self.user.remove_album(name);
        if removed {
            self.persist();
        }
        removed
    }

    // ==================== 照片操作 ====================

    /// 导入照片到相册
    ///
    /// 先通过资源解析器验证定位符，不可用时返回
    /// `ResourceUnavailable` 且不产生任何变更。相册中已有相同
    /// 定位符时为无操作，返回 `false`。
    pub fn import_photo(&mut self, album: &str, locator: &str) -> AppResult<bool> {
        self.resolver.validate(locator)?;
        let album_ref = self
            .user
            .album_by_name_mut(album)
            .ok_or_else(|| AppError::AlbumNotFound(album.to_string()))?;

        let added = album_ref.add_photo(Photo::new(locator));
        self.persist();
        Ok(added)
    }

    /// 从相册移除照片
    ///
    /// 幂等：照片不存在时为无操作，返回 `false`。
    pub fn remove_photo(&mut self, album: &str, locator: &str) -> AppResult<bool> {
        let album_ref = self
            .user
            .album_by_name_mut(album)
            .ok_or_else(|| AppError::AlbumNotFound(album.to_string()))?;

        let removed = album_ref.remove_photo(locator);
        if removed {
            self.persist();
        }
        Ok(removed)
    }

    /// 复制照片到另一个相册
    ///
    /// 用源照片的定位符构造新照片加入目标相册，源相册不变。
    /// 新照片的标签列表从空开始（沿用观察到的行为，标签不随
    /// 复制保留）。目标相册中已存在时为无操作，返回 `false`。
    pub fn copy_photo(
        &mut self,
        source_album: &str,
        locator: &str,
        target_album: &str,
    ) -> AppResult<bool> {
        // 变更前完成全部校验
        let source = self
            .user
            .album_by_name(source_album)
            .ok_or_else(|| AppError::AlbumNotFound(source_album.to_string()))?;
        if !source.contains_locator(locator) {
            return Err(AppError::PhotoNotFound(locator.to_string()));
        }

        let target = self
            .user
            .album_by_name_mut(target_album)
            .ok_or_else(|| AppError::AlbumNotFound(target_album.to_string()))?;
        let added = target.add_photo(Photo::new(locator));
        self.persist();
        Ok(added)
    }

    /// 移动照片到另一个相册
    ///
    /// 等价于复制后从源相册移除，标签同样不保留。
    pub fn move_photo(
        &mut self,
        source_album: &str,
        locator: &str,
        target_album: &str,
    ) -> AppResult<bool> {
        let added = self.copy_photo(source_album, locator, target_album)?;
        if let Some(source) = self.user.album_by_name_mut(source_album) {
            source.remove_photo(locator);
        }
        self.persist();
        Ok(added)
    }

    // ==================== 标签操作 ====================

    /// 给照片添加标签
    ///
    /// 已有相等标签时返回 `DuplicateTag`。
    pub fn add_tag(&mut self, album: &str, locator: &str, tag: Tag) -> AppResult<()> {
        let album_ref = self
            .user
            .album_by_name_mut(album)
            .ok_or_else(|| AppError::AlbumNotFound(album.to_string()))?;
        let photo = album_ref
            .photo_by_locator_mut(locator)
            .ok_or_else(|| AppError::PhotoNotFound(locator.to_string()))?;

        photo.add_tag(tag)?;
        self.persist();
        Ok(())
    }

    /// 从照片移除标签
    ///
    /// 幂等：标签不存在时为无操作，返回 `false`。
    pub fn remove_tag(&mut self, album: &str, locator: &str, tag: &Tag) -> AppResult<bool> {
        let album_ref = self
            .user
            .album_by_name_mut(album)
            .ok_or_else(|| AppError::AlbumNotFound(album.to_string()))?;
        let photo = album_ref
            .photo_by_locator_mut(locator)
            .ok_or_else(|| AppError::PhotoNotFound(locator.to_string()))?;

        let removed = photo.remove_tag(tag);
        if removed {
            self.persist();
        }
        Ok(removed)
    }

    // ==================== 搜索 ====================

    /// 在全部相册中搜索匹配照片，返回定位符列表
    pub fn search(&self, query: &TagQuery) -> Vec<String> {
        search::search_photos(&self.user, query)
    }

    /// 整体回写快照，失败只记录日志（即发即忘）
    fn persist(&self) {
        if let Err(e) = self.store.save(&self.user) {
            tracing::warn!("保存用户数据失败: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{FsResourceResolver, TrustingResolver};
    use crate::services::search::TagPredicate;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn open_library(tmp: &TempDir) -> Library {
        let store = UserStore::from_path(tmp.path().join("user_data.json")).unwrap();
        Library::with_store(store, Arc::new(TrustingResolver))
    }

    #[test]
    fn test_mutations_are_persisted_immediately() {
        let tmp = TempDir::new().unwrap();
        let mut library = open_library(&tmp);
        library.create_album("Vacation").unwrap();
        library.import_photo("Vacation", "file:///a.jpg").unwrap();

        // 另一个会话看到完整快照
        let reopened = open_library(&tmp);
        assert_eq!(reopened.album_names(), vec!["Vacation"]);
        assert_eq!(
            reopened.photo_locators("Vacation").unwrap(),
            vec!["file:///a.jpg"]
        );
    }

    #[test]
    fn test_create_album_duplicate_is_all_or_nothing() {
        let tmp = TempDir::new().unwrap();
        let mut library = open_library(&tmp);
        library.create_album("Vacation").unwrap();

        let err = library.create_album("VACATION").unwrap_err();
        assert!(matches!(err, AppError::DuplicateAlbumName(_)));
        assert_eq!(library.album_names(), vec!["Vacation"]);
    }

    #[test]
    fn test_import_dedup_is_noop_not_error() {
        let tmp = TempDir::new().unwrap();
        let mut library = open_library(&tmp);
        library.create_album("Vacation").unwrap();

        assert!(library.import_photo("Vacation", "file:///a.jpg").unwrap());
        assert!(!library.import_photo("Vacation", "file:///a.jpg").unwrap());
        assert_eq!(library.photo_locators("Vacation").unwrap().len(), 1);
    }

    #[test]
    fn test_import_validates_through_resolver() {
        let tmp = TempDir::new().unwrap();
        let store = UserStore::from_path(tmp.path().join("user_data.json")).unwrap();
        let mut library = Library::with_store(store, Arc::new(FsResourceResolver));
        library.create_album("Vacation").unwrap();

        let missing = format!("file://{}", tmp.path().join("missing.jpg").display());
        let err = library.import_photo("Vacation", &missing).unwrap_err();
        assert!(matches!(err, AppError::ResourceUnavailable(_)));
        assert!(library.photo_locators("Vacation").unwrap().is_empty());
    }

    #[test]
    fn test_remove_photo_twice_equals_once() {
        let tmp = TempDir::new().unwrap();
        let mut library = open_library(&tmp);
        library.create_album("Vacation").unwrap();
        library.import_photo("Vacation", "file:///a.jpg").unwrap();

        assert!(library.remove_photo("Vacation", "file:///a.jpg").unwrap());
        assert!(!library.remove_photo("Vacation", "file:///a.jpg").unwrap());
        assert!(library.photo_locators("Vacation").unwrap().is_empty());
    }

    #[test]
    fn test_copy_starts_with_empty_tag_list() {
        let tmp = TempDir::new().unwrap();
        let mut library = open_library(&tmp);
        library.create_album("Source").unwrap();
        library.create_album("Target").unwrap();
        library.import_photo("Source", "file:///a.jpg").unwrap();
        library
            .add_tag("Source", "file:///a.jpg", Tag::new("Person", "Alice"))
            .unwrap();

        assert!(library.copy_photo("Source", "file:///a.jpg", "Target").unwrap());

        // 源照片保留标签，副本没有
        assert_eq!(library.photo_tags("Source", "file:///a.jpg").unwrap().len(), 1);
        assert!(library.photo_tags("Target", "file:///a.jpg").unwrap().is_empty());
        assert_eq!(
            library.photo_locators("Source").unwrap(),
            vec!["file:///a.jpg"]
        );
    }

    #[test]
    fn test_move_removes_from_source_and_drops_tags() {
        let tmp = TempDir::new().unwrap();
        let mut library = open_library(&tmp);
        library.create_album("Source").unwrap();
        library.create_album("Target").unwrap();
        library.import_photo("Source", "file:///a.jpg").unwrap();
        library
            .add_tag("Source", "file:///a.jpg", Tag::new("Person", "Alice"))
            .unwrap();

        library.move_photo("Source", "file:///a.jpg", "Target").unwrap();

        assert!(library.photo_locators("Source").unwrap().is_empty());
        assert_eq!(
            library.photo_locators("Target").unwrap(),
            vec!["file:///a.jpg"]
        );
        assert!(library.photo_tags("Target", "file:///a.jpg").unwrap().is_empty());
    }

    #[test]
    fn test_copy_validates_before_mutating() {
        let tmp = TempDir::new().unwrap();
        let mut library = open_library(&tmp);
        library.create_album("Source").unwrap();
        library.import_photo("Source", "file:///a.jpg").unwrap();

        let err = library
            .copy_photo("Source", "file:///a.jpg", "Nope")
            .unwrap_err();
        assert!(matches!(err, AppError::AlbumNotFound(_)));

        let err = library
            .copy_photo("Source", "file:///missing.jpg", "Source")
            .unwrap_err();
        assert!(matches!(err, AppError::PhotoNotFound(_)));
    }

    #[test]
    fn test_add_tag_duplicate_leaves_photo_unchanged() {
        let tmp = TempDir::new().unwrap();
        let mut library = open_library(&tmp);
        library.create_album("Vacation").unwrap();
        library.import_photo("Vacation", "file:///a.jpg").unwrap();
        library
            .add_tag("Vacation", "file:///a.jpg", Tag::new("Person", "Alice"))
            .unwrap();

        let err = library
            .add_tag("Vacation", "file:///a.jpg", Tag::new("Person", "Alice"))
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateTag(_)));
        assert_eq!(library.photo_tags("Vacation", "file:///a.jpg").unwrap().len(), 1);
    }

    #[test]
    fn test_remove_tag_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let mut library = open_library(&tmp);
        library.create_album("Vacation").unwrap();
        library.import_photo("Vacation", "file:///a.jpg").unwrap();
        let tag = Tag::new("Location", "Paris");
        library.add_tag("Vacation", "file:///a.jpg", tag.clone()).unwrap();

        assert!(library.remove_tag("Vacation", "file:///a.jpg", &tag).unwrap());
        assert!(!library.remove_tag("Vacation", "file:///a.jpg", &tag).unwrap());
    }

    #[test]
    fn test_search_over_session_aggregate() {
        let tmp = TempDir::new().unwrap();
        let mut library = open_library(&tmp);
        library.create_album("People").unwrap();
        library.import_photo("People", "file:///p1.jpg").unwrap();
        library
            .add_tag("People", "file:///p1.jpg", Tag::new("Person", "Alice"))
            .unwrap();

        let results = library.search(&TagQuery::single(TagPredicate::new("person", "Al")));
        assert_eq!(results, vec!["file:///p1.jpg"]);
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        let tmp = TempDir::new().unwrap();
        let blob = tmp.path().join("user_data.json");
        // 让快照路径指向目录，回写必然失败
        std::fs::create_dir(&blob).unwrap();
        let store = UserStore::from_path(blob).unwrap();
        let mut library = Library::with_store(store, Arc::new(TrustingResolver));

        // 变更本身成功，内存状态照常推进
        library.create_album("Vacation").unwrap();
        library.import_photo("Vacation", "file:///a.jpg").unwrap();
        assert_eq!(
            library.photo_locators("Vacation").unwrap(),
            vec!["file:///a.jpg"]
        );
    }

    #[test]
    fn test_last_writer_wins_between_sessions() {
        let tmp = TempDir::new().unwrap();
        let mut first = open_library(&tmp);
        first.create_album("Seed").unwrap();

        // 两个会话基于同一快照，后保存者覆盖先保存者
        let mut second = open_library(&tmp);
        first.create_album("FromFirst").unwrap();
        second.create_album("FromSecond").unwrap();

        let reopened = open_library(&tmp);
        assert_eq!(reopened.album_names(), vec!["Seed", "FromSecond"]);
    }
}
