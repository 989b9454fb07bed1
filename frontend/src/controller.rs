//! Bộ điều khiển danh sách dùng chung cho mọi màn hình tài nguyên
//!
//! Gom mẫu "tải - bảng - modal - xóa có xác nhận" về một chỗ thay vì
//! lặp lại ở từng màn hình. Mỗi lần tải mang một số thứ tự tăng dần;
//! kết quả về muộn của một yêu cầu cũ bị bỏ qua để trang 1 không bao
//! giờ đè lên trang 2 vừa tải xong. Component bị hủy giữa chừng thì
//! phần đuôi async trở thành no-op.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use qlns_shared::{ListResponse, PageMeta};

use crate::api::ApiResult;

/// Trạng thái danh sách của một màn hình: dữ liệu, cờ tải, lỗi và
/// siêu dữ liệu phân trang (bảng không phân trang coi như một trang).
pub struct ListController<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub meta: RwSignal<PageMeta>,
    epoch: StoredValue<u64>,
}

impl<T: Send + Sync + 'static> Clone for ListController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListController<T> {}

impl<T: Send + Sync + 'static> ListController<T> {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
            meta: RwSignal::new(PageMeta::default()),
            epoch: StoredValue::new(0),
        }
    }

    /// Tải (hoặc tải lại) danh sách. Chỉ yêu cầu phát đi sau cùng
    /// được phép ghi kết quả vào state.
    pub fn load<Fut>(&self, fetch: Fut)
    where
        Fut: Future<Output = ApiResult<ListResponse<T>>> + 'static,
    {
        let issued = self.epoch.get_value() + 1;
        self.epoch.set_value(issued);

        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            let outcome = fetch.await;

            // Một yêu cầu mới hơn đã phát đi, hoặc màn hình đã bị
            // hủy: kết quả này không còn giá trị.
            if this.epoch.try_get_value() != Some(issued) {
                return;
            }

            match outcome {
                Ok(list) => {
                    let _ = this.meta.try_set(list.page_meta());
                    let _ = this.items.try_set(list.into_items());
                    let _ = this.error.try_set(None);
                }
                Err(err) => {
                    let _ = this.error.try_set(Some(err.to_string()));
                }
            }
            let _ = this.loading.try_set(false);
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.with(Vec::is_empty)
    }
}

impl<T: Send + Sync + 'static> Default for ListController<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Trạng thái modal thêm/sửa: cờ mở, bản ghi đang sửa (None = thêm
/// mới), lỗi hiển thị trong modal và cờ đang gửi.
pub struct DialogState<T: Send + Sync + 'static> {
    pub show: RwSignal<bool>,
    pub editing: RwSignal<Option<T>>,
    pub error: RwSignal<Option<String>>,
    pub busy: RwSignal<bool>,
}

impl<T: Send + Sync + 'static> Clone for DialogState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for DialogState<T> {}

impl<T: Clone + Send + Sync + 'static> DialogState<T> {
    pub fn new() -> Self {
        Self {
            show: RwSignal::new(false),
            editing: RwSignal::new(None),
            error: RwSignal::new(None),
            busy: RwSignal::new(false),
        }
    }

    pub fn open_create(&self) {
        self.editing.set(None);
        self.error.set(None);
        self.show.set(true);
    }

    pub fn open_edit(&self, record: T) {
        self.editing.set(Some(record));
        self.error.set(None);
        self.show.set(true);
    }

    pub fn close(&self) {
        self.show.set(false);
        self.error.set(None);
        self.busy.set(false);
    }

    /// Bản ghi đang sửa tại thời điểm submit (không theo dõi reactive).
    pub fn editing_snapshot(&self) -> Option<T> {
        self.editing.get_untracked()
    }
}

impl<T: Clone + Send + Sync + 'static> Default for DialogState<T> {
    fn default() -> Self {
        Self::new()
    }
}
