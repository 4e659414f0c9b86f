// User-facing texts shown by the pages. All copy is Indonesian.

pub const LOADING_SPOTS: &str = "Memuat data spot...";
pub const LOADING_FEATURED: &str = "Memuat pilihan terbaik...";
pub const LOADING_SWIPE: &str = "Memuat spot dari server...";

pub const LOAD_SPOTS_FAILED: &str = "Gagal memuat data spot.";
pub const LOAD_FEATURED_FAILED: &str = "Gagal memuat rekomendasi.";
pub const LOAD_SWIPE_FAILED: &str = "Gagal memuat data spot dari server.";

pub const NO_FEATURED_FOR_CATEGORY: &str = "Belum ada pilihan terbaik untuk kategori ini.";
pub const NO_SPOTS_YET: &str = "Belum ada data spot. Tambahkan dari panel admin.";
pub const NO_SPOTS_FOR_CATEGORY: &str = "Belum ada spot untuk kategori ini.";
pub const ALL_SPOTS_SEEN: &str = "Kamu sudah melihat semua spot untuk kategori ini";

pub const SIGNED_IN: &str = "Berhasil login sebagai admin.";
pub const SIGNED_OUT: &str = "Berhasil logout.";
pub const SPOT_DELETED: &str = "Spot berhasil dihapus.";
pub const SPOT_UPDATED: &str = "Spot berhasil di-update.";
pub const SPOT_CREATED: &str = "Spot baru berhasil ditambahkan.";
pub const NO_EMAIL: &str = "(tanpa email)";
pub const EMPTY_TABLE: &str =
    "Belum ada data spot. Tambahkan spot baru melalui form di sebelah kanan.";

pub const FORM_MODE_CREATE: &str = "Mode: tambah spot baru";
pub const FORM_MODE_EDIT: &str = "Mode: edit spot";

pub const TOAST_LIKE: &str = "Ditandai suka";
pub const TOAST_BOOKMARK: &str = "Disimpan ke bookmark";
pub const TOAST_SKIP: &str = "Spot dilewati";

/// Count line under the explore list.
pub fn showing_spots(count: usize, category: Option<&str>) -> String {
    match (count, category) {
        (0, _) => "Menampilkan 0 spot.".to_string(),
        (count, Some(category)) => format!("Menampilkan {count} spot untuk kategori {category}."),
        (count, None) => format!("Menampilkan {count} spot."),
    }
}

pub fn swipe_indicator(position: usize, total: usize) -> String {
    format!("Spot {position} dari {total}")
}

pub fn swipe_stats(likes: usize, bookmarks: usize) -> String {
    format!("{likes} suka • {bookmarks} disimpan")
}

pub fn registered_spots(count: usize) -> String {
    format!("{count} spot terdaftar.")
}

pub fn sign_in_failed(code: &str) -> String {
    format!("Gagal login: {code}")
}

pub fn sign_out_failed(reason: &str) -> String {
    format!("Gagal logout: {reason}")
}

pub fn delete_failed(reason: &str) -> String {
    format!("Gagal menghapus spot: {reason}")
}

pub fn save_failed(reason: &str) -> String {
    format!("Gagal menyimpan spot: {reason}")
}

pub fn admin_load_failed(reason: &str) -> String {
    format!("Gagal memuat data spot: {reason}")
}

pub fn confirm_delete(name: &str) -> String {
    format!("Yakin ingin menghapus spot \"{name}\"?")
}
