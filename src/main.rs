use anyhow::Context;
use serde_json::json;
use std::sync::Arc;

use kampuspot::adapters::file::file_key_value_store::FileKeyValueStore;
use kampuspot::adapters::in_memory::in_memory_auth::InMemoryAuthProvider;
use kampuspot::adapters::in_memory::in_memory_collection::InMemoryDocumentCollection;
use kampuspot::application::pages::admin::AdminPage;
use kampuspot::application::pages::explore::ExplorePage;
use kampuspot::application::pages::swipe::SwipePage;
use kampuspot::application::swipe_log::SwipeLog;
use kampuspot::core::ports::DocumentCollection;
use kampuspot::core::projector::filter::CategoryFilter;
use kampuspot::core::spot::category::Category;
use kampuspot::core::spot::draft::SpotForm;
use kampuspot::shell::config::Config;
use kampuspot::shell::logging;
use kampuspot::shell::text_renderer::{render_admin, render_explore, render_swipe};

const ADMIN_EMAIL: &str = "admin@kampuspot.id";
const ADMIN_PASSWORD: &str = "kampuspot-demo";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("invalid configuration")?;
    logging::init(&config.log_filter);
    tracing::info!(
        collection = %config.collection,
        storage = %config.storage_dir.display(),
        "starting"
    );

    // In-memory backend for now
    let collection = Arc::new(InMemoryDocumentCollection::new());
    let auth = Arc::new(InMemoryAuthProvider::new().with_account(ADMIN_EMAIL, ADMIN_PASSWORD));
    let storage = Arc::new(
        FileKeyValueStore::open(&config.storage_dir).context("cannot open device storage")?,
    );

    seed(collection.as_ref(), &config.collection).await?;

    let mut explore = ExplorePage::new(
        Arc::clone(&collection),
        config.collection.clone(),
        config.fallback_image_url.clone(),
    );
    explore.start().await;
    explore.pump();
    println!("{}", render_explore(&explore.view()));
    explore.select_category(CategoryFilter::Only(Category::Makanan));
    if let Some(id) = explore.sync().spots().first().map(|spot| spot.id.clone()) {
        explore.open_detail(&id);
    }
    println!("{}", render_explore(&explore.view()));
    explore.close_detail();

    let mut swipe = SwipePage::new(
        Arc::clone(&collection),
        config.collection.clone(),
        SwipeLog::with_key(Arc::clone(&storage), config.swipe_key.clone()),
        config.fallback_image_url.clone(),
    );
    swipe.start().await;
    swipe.pump();
    println!("{}", render_swipe(&swipe.view(), None));
    for key in ["ArrowRight", "ArrowUp", "ArrowLeft"] {
        let toast = swipe.handle_key(key);
        println!("{}", render_swipe(&swipe.view(), toast.as_ref()));
    }

    let mut admin = AdminPage::new(Arc::clone(&collection), config.collection.clone(), auth);
    admin.start().await;
    admin.sign_in(ADMIN_EMAIL, "salah").await;
    println!("{}", render_admin(&admin.view()));
    admin.sign_in(ADMIN_EMAIL, ADMIN_PASSWORD).await;
    println!("{}", render_admin(&admin.view()));

    *admin.form_mut() = SpotForm {
        name: "Lapangan Futsal Kampus".to_string(),
        category: "Hiburan".to_string(),
        distance: "1250".to_string(),
        short_description: "Sewa lapangan per jam, ramai sore hari.".to_string(),
        image_url: "https://images.pexels.com/photos/3148452/pexels-photo-3148452.jpeg".to_string(),
        location_text: "Belakang gedung olahraga".to_string(),
        ..Default::default()
    };
    admin.submit().await;
    admin.pump().await;
    println!("{}", render_admin(&admin.view()));

    // Every page follows the same collection.
    explore.pump();
    swipe.pump();
    println!("{}", render_explore(&explore.view()));
    println!("{}", render_swipe(&swipe.view(), None));

    admin.sign_out().await;
    println!("{}", render_admin(&admin.view()));

    explore.stop();
    swipe.stop();
    tracing::info!("session finished");
    Ok(())
}

async fn seed(collection: &InMemoryDocumentCollection, name: &str) -> anyhow::Result<()> {
    let spots = [
        json!({
            "name": "Warung Bu Sri",
            "category": "Makanan",
            "distance": 350,
            "shortDescription": "Nasi rames murah dekat gerbang belakang.",
            "fullDescription": "Buka dari jam 7 pagi. Favorit mahasiswa teknik.",
            "imageUrl": "https://images.pexels.com/photos/1640777/pexels-photo-1640777.jpeg",
            "locationText": "Gerbang belakang kampus",
            "isFeatured": true,
        }),
        json!({
            "name": "Kopi Kenangan Kampus",
            "category": "Kafe",
            "distance": 1200,
            "shortDescription": "Kopi susu dan colokan di setiap meja.",
            "imageUrl": "https://images.pexels.com/photos/302899/pexels-photo-302899.jpeg",
            "locationText": "Depan perpustakaan pusat",
            "isFeatured": true,
        }),
        json!({
            "name": "Perpustakaan Pusat",
            "category": "Belajar",
            "distance": 150,
            "shortDescription": "Ruang baca senyap, buka sampai malam.",
            "locationText": "Gedung rektorat lantai 2",
            "isFeatured": false,
        }),
        json!({
            "name": "Bakso Pak Kumis",
            "category": "Makanan",
            "distance": 800,
            "shortDescription": "Bakso urat porsi besar.",
            "isFeatured": false,
        }),
    ];
    for spot in spots {
        let serde_json::Value::Object(fields) = spot else {
            continue;
        };
        collection
            .create(name, fields)
            .await
            .context("cannot seed spots")?;
    }
    Ok(())
}
