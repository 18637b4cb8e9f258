use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::thread;

use crate::api;
use crate::config::ClientConfig;
use crate::session;
use crate::types::{AddressDto, AuthData, HotelDto, HotelPayload, PriceRangeDto, UserInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Auth,
    Dashboard,
    Feed,
    Detail,
    Editor,
    MyHotels,
}

#[derive(Default)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Default)]
pub struct ListState {
    pub hotels: Vec<HotelDto>,
    pub loading: bool,
    pub loaded: bool,
    pub error: Option<String>,
}

#[derive(Default)]
pub struct EditorState {
    pub editing_id: Option<String>,
    pub name: String,
    pub description: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub amenities_input: String,
    pub images_input: String,
    pub upload_path: String,
    pub price_min_input: String,
    pub price_max_input: String,
    pub submitting: bool,
    pub uploading: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
}

/// Central application context shared across views. Auth state lives here
/// and nowhere else; login fills it, logout clears it.
pub struct AppState {
    pub config: ClientConfig,
    pub view: AppView,
    pub auth: AuthState,

    pub signup_mode: bool,
    pub name_input: String,
    pub email_input: String,
    pub password_input: String,
    pub phone_input: String,

    pub feed: ListState,
    pub my: ListState,
    pub feed_filter: String,
    pub feed_city_filter: String,

    pub selected: Option<HotelDto>,
    pub detail_loading: bool,
    pub detail_error: Option<String>,

    pub editor: EditorState,
    pub notice: Option<String>,

    auth_rx: Option<Receiver<Result<AuthData, String>>>,
    me_rx: Option<Receiver<Result<UserInfo, String>>>,
    feed_rx: Option<Receiver<Result<Vec<HotelDto>, String>>>,
    my_rx: Option<Receiver<Result<Vec<HotelDto>, String>>>,
    detail_rx: Option<Receiver<Result<HotelDto, String>>>,
    submit_rx: Option<Receiver<Result<HotelDto, String>>>,
    delete_rx: Option<Receiver<(String, Result<(), String>)>>,
    upload_rx: Option<Receiver<Result<String, String>>>,
}

impl AppState {
    pub fn new() -> Self {
        let mut state = Self {
            config: ClientConfig::new(),
            view: AppView::Auth,
            auth: AuthState::default(),
            signup_mode: false,
            name_input: String::new(),
            email_input: String::new(),
            password_input: String::new(),
            phone_input: String::new(),
            feed: ListState::default(),
            my: ListState::default(),
            feed_filter: String::new(),
            feed_city_filter: String::new(),
            selected: None,
            detail_loading: false,
            detail_error: None,
            editor: EditorState::default(),
            notice: None,
            auth_rx: None,
            me_rx: None,
            feed_rx: None,
            my_rx: None,
            detail_rx: None,
            submit_rx: None,
            delete_rx: None,
            upload_rx: None,
        };

        // Revalidate a persisted token once on startup; a failure silently
        // resets to the signed-out state.
        if let Some(token) = session::load_token() {
            state.config.set_token(Some(token));
            state.auth.loading = true;

            let (tx, rx) = channel();
            let config = state.config.clone();
            thread::spawn(move || {
                let _ = tx.send(api::me(&config));
            });
            state.me_rx = Some(rx);
        }

        state
    }

    pub fn can_edit(&self, hotel: &HotelDto) -> bool {
        match (&self.auth.user, hotel.owner_id.as_deref()) {
            (Some(user), Some(owner)) => user.id == owner,
            _ => false,
        }
    }

    // ----- background result polling -----

    pub fn poll(&mut self) {
        self.poll_auth();
        self.poll_me();
        self.poll_feed();
        self.poll_my();
        self.poll_detail();
        self.poll_submit();
        self.poll_delete();
        self.poll_upload();
    }

    fn poll_auth(&mut self) {
        let Some(rx) = &self.auth_rx else { return };
        let Ok(result) = rx.try_recv() else { return };
        self.auth_rx = None;
        self.auth.loading = false;

        match result {
            Ok(AuthData { user, token }) => {
                session::save_token(&token);
                self.config.set_token(Some(token));
                self.auth.user = Some(user);
                self.auth.error = None;
                self.password_input.clear();
                self.signup_mode = false;
                self.view = AppView::Dashboard;
            }
            Err(e) => self.auth.error = Some(e),
        }
    }

    fn poll_me(&mut self) {
        let Some(rx) = &self.me_rx else { return };
        let Ok(result) = rx.try_recv() else { return };
        self.me_rx = None;
        self.auth.loading = false;

        match result {
            Ok(user) => {
                self.auth.user = Some(user);
                self.view = AppView::Dashboard;
            }
            Err(_) => {
                self.config.clear_token();
                session::clear_token();
                self.view = AppView::Auth;
            }
        }
    }

    fn poll_feed(&mut self) {
        let Some(rx) = &self.feed_rx else { return };
        let Ok(result) = rx.try_recv() else { return };
        self.feed_rx = None;
        self.feed.loading = false;

        match result {
            Ok(hotels) => {
                self.feed.hotels = hotels;
                self.feed.loaded = true;
                self.feed.error = None;
            }
            Err(e) => self.feed.error = Some(e),
        }
    }

    fn poll_my(&mut self) {
        let Some(rx) = &self.my_rx else { return };
        let Ok(result) = rx.try_recv() else { return };
        self.my_rx = None;
        self.my.loading = false;

        match result {
            Ok(hotels) => {
                self.my.hotels = hotels;
                self.my.loaded = true;
                self.my.error = None;
            }
            Err(e) => self.my.error = Some(e),
        }
    }

    fn poll_detail(&mut self) {
        let Some(rx) = &self.detail_rx else { return };
        let Ok(result) = rx.try_recv() else { return };
        self.detail_rx = None;
        self.detail_loading = false;

        match result {
            Ok(hotel) => {
                self.detail_error = None;
                self.selected = Some(hotel);
            }
            Err(e) => self.detail_error = Some(e),
        }
    }

    fn poll_submit(&mut self) {
        let Some(rx) = &self.submit_rx else { return };
        let Ok(result) = rx.try_recv() else { return };
        self.submit_rx = None;
        self.editor.submitting = false;

        match result {
            Ok(hotel) => {
                // Reflect the confirmed record in the local lists right away.
                replace_or_insert(&mut self.feed.hotels, &hotel);
                replace_or_insert(&mut self.my.hotels, &hotel);

                self.notice = Some(if self.editor.editing_id.is_some() {
                    format!("Updated \"{}\"", hotel.name)
                } else {
                    format!("Created \"{}\"", hotel.name)
                });

                self.editor = EditorState::default();
                self.selected = Some(hotel);
                self.view = AppView::Detail;
            }
            Err(e) => self.editor.error = Some(e),
        }
    }

    fn poll_delete(&mut self) {
        let Some(rx) = &self.delete_rx else { return };
        let Ok((id, result)) = rx.try_recv() else { return };
        self.delete_rx = None;

        match result {
            Ok(()) => {
                self.feed.hotels.retain(|h| h.id != id);
                self.my.hotels.retain(|h| h.id != id);
                if self.selected.as_ref().is_some_and(|h| h.id == id) {
                    self.selected = None;
                    self.view = AppView::MyHotels;
                }
                self.notice = Some("Hotel deleted".to_string());
            }
            Err(e) => self.notice = Some(format!("Delete failed: {e}")),
        }
    }

    fn poll_upload(&mut self) {
        let Some(rx) = &self.upload_rx else { return };
        let Ok(result) = rx.try_recv() else { return };
        self.upload_rx = None;
        self.editor.uploading = false;

        match result {
            Ok(url) => {
                if !self.editor.images_input.trim().is_empty() {
                    self.editor.images_input.push('\n');
                }
                self.editor.images_input.push_str(&url);
                self.editor.upload_path.clear();
                self.editor.notice = Some("Image uploaded".to_string());
            }
            Err(e) => self.editor.error = Some(e),
        }
    }

    // ----- auth -----

    pub fn handle_login(&mut self) {
        if self.email_input.trim().is_empty() || self.password_input.is_empty() {
            self.auth.error = Some("Email and password are required".to_string());
            return;
        }

        self.auth.loading = true;
        self.auth.error = None;

        let (tx, rx) = channel();
        let config = self.config.clone();
        let email = self.email_input.trim().to_string();
        let password = self.password_input.clone();
        thread::spawn(move || {
            let _ = tx.send(api::login(&config, email, password));
        });
        self.auth_rx = Some(rx);
    }

    pub fn handle_signup(&mut self) {
        if self.name_input.trim().is_empty() {
            self.auth.error = Some("Name is required".to_string());
            return;
        }
        if !self.email_input.contains('@') {
            self.auth.error = Some("Please enter a valid email address".to_string());
            return;
        }
        if self.password_input.len() < 6 {
            self.auth.error = Some("Password must be at least 6 characters".to_string());
            return;
        }
        if self.phone_input.trim().len() < 7 {
            self.auth.error = Some("Please enter a valid phone number".to_string());
            return;
        }

        self.auth.loading = true;
        self.auth.error = None;

        let (tx, rx) = channel();
        let config = self.config.clone();
        let name = self.name_input.trim().to_string();
        let email = self.email_input.trim().to_string();
        let password = self.password_input.clone();
        let phone = self.phone_input.trim().to_string();
        thread::spawn(move || {
            let _ = tx.send(api::signup(&config, name, email, password, phone));
        });
        self.auth_rx = Some(rx);
    }

    pub fn logout(&mut self) {
        self.config.clear_token();
        session::clear_token();
        self.auth = AuthState::default();
        self.feed = ListState::default();
        self.my = ListState::default();
        self.selected = None;
        self.editor = EditorState::default();
        self.notice = None;
        self.view = AppView::Auth;
    }

    // ----- hotel lists -----

    pub fn refresh_feed(&mut self) {
        if self.feed.loading {
            return;
        }
        self.feed.loading = true;
        self.feed.error = None;

        let (tx, rx) = channel();
        let config = self.config.clone();
        thread::spawn(move || {
            let _ = tx.send(api::list_hotels(&config));
        });
        self.feed_rx = Some(rx);
    }

    pub fn ensure_feed(&mut self) {
        if !self.feed.loaded && !self.feed.loading {
            self.refresh_feed();
        }
    }

    pub fn refresh_my(&mut self) {
        if self.my.loading {
            return;
        }
        self.my.loading = true;
        self.my.error = None;

        let (tx, rx) = channel();
        let config = self.config.clone();
        thread::spawn(move || {
            let _ = tx.send(api::my_hotels(&config));
        });
        self.my_rx = Some(rx);
    }

    pub fn ensure_my(&mut self) {
        if !self.my.loaded && !self.my.loading {
            self.refresh_my();
        }
    }

    /// Client-side filtering over the fetched list: free text against
    /// name/description, plus a separate city filter.
    pub fn filtered_feed(&self) -> Vec<&HotelDto> {
        let text = self.feed_filter.trim().to_lowercase();
        let city = self.feed_city_filter.trim().to_lowercase();

        self.feed
            .hotels
            .iter()
            .filter(|h| {
                (text.is_empty()
                    || h.name.to_lowercase().contains(&text)
                    || h.description.to_lowercase().contains(&text))
                    && (city.is_empty() || h.address.city.to_lowercase().contains(&city))
            })
            .collect()
    }

    // ----- detail -----

    pub fn open_detail(&mut self, hotel: HotelDto) {
        let id = hotel.id.clone();
        self.selected = Some(hotel);
        self.detail_error = None;
        self.detail_loading = true;
        self.view = AppView::Detail;

        let (tx, rx) = channel();
        let config = self.config.clone();
        thread::spawn(move || {
            let _ = tx.send(api::get_hotel(&config, &id));
        });
        self.detail_rx = Some(rx);
    }

    // ----- editor -----

    pub fn open_editor_new(&mut self) {
        self.editor = EditorState::default();
        self.view = AppView::Editor;
    }

    pub fn open_editor_for(&mut self, hotel: &HotelDto) {
        self.editor = EditorState {
            editing_id: Some(hotel.id.clone()),
            name: hotel.name.clone(),
            description: hotel.description.clone(),
            street: hotel.address.street.clone(),
            city: hotel.address.city.clone(),
            state: hotel.address.state.clone(),
            zip_code: hotel.address.zip_code.clone(),
            country: hotel.address.country.clone(),
            amenities_input: hotel.amenities.join(", "),
            images_input: hotel.images.join("\n"),
            price_min_input: hotel.price_range.min.to_string(),
            price_max_input: hotel.price_range.max.to_string(),
            ..EditorState::default()
        };
        self.view = AppView::Editor;
    }

    fn editor_payload(&self) -> Result<HotelPayload, String> {
        let editor = &self.editor;

        if editor.name.trim().is_empty() {
            return Err("Name is required".to_string());
        }
        if editor.description.trim().is_empty() {
            return Err("Description is required".to_string());
        }
        for (value, label) in [
            (&editor.street, "Street"),
            (&editor.city, "City"),
            (&editor.state, "State"),
            (&editor.zip_code, "Zip code"),
            (&editor.country, "Country"),
        ] {
            if value.trim().is_empty() {
                return Err(format!("{label} is required"));
            }
        }

        let images: Vec<String> = editor
            .images_input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        if images.is_empty() {
            return Err("At least one image is required".to_string());
        }

        let amenities: Vec<String> = editor
            .amenities_input
            .split(',')
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string)
            .collect();

        let min = parse_price(&editor.price_min_input, "Minimum price")?;
        let max = parse_price(&editor.price_max_input, "Maximum price")?;
        if max < min {
            return Err("Maximum price must not be below the minimum".to_string());
        }

        Ok(HotelPayload {
            name: editor.name.trim().to_string(),
            description: editor.description.trim().to_string(),
            address: AddressDto {
                street: editor.street.trim().to_string(),
                city: editor.city.trim().to_string(),
                state: editor.state.trim().to_string(),
                zip_code: editor.zip_code.trim().to_string(),
                country: editor.country.trim().to_string(),
            },
            amenities,
            images,
            price_range: PriceRangeDto { min, max },
        })
    }

    pub fn submit_editor(&mut self) {
        let payload = match self.editor_payload() {
            Ok(payload) => payload,
            Err(e) => {
                self.editor.error = Some(e);
                return;
            }
        };

        self.editor.submitting = true;
        self.editor.error = None;

        let (tx, rx) = channel();
        let config = self.config.clone();
        let editing_id = self.editor.editing_id.clone();
        thread::spawn(move || {
            let result = match editing_id {
                Some(id) => api::update_hotel(&config, &id, &payload),
                None => api::create_hotel(&config, &payload),
            };
            let _ = tx.send(result);
        });
        self.submit_rx = Some(rx);
    }

    pub fn start_upload(&mut self) {
        let path = self.editor.upload_path.trim().to_string();
        if path.is_empty() {
            self.editor.error = Some("Enter the path of an image file to upload".to_string());
            return;
        }

        self.editor.uploading = true;
        self.editor.error = None;

        let (tx, rx) = channel();
        let config = self.config.clone();
        thread::spawn(move || {
            let result =
                api::upload_image(&config, &PathBuf::from(path)).map(|stored| stored.url);
            let _ = tx.send(result);
        });
        self.upload_rx = Some(rx);
    }

    // ----- delete -----

    pub fn request_delete(&mut self, id: String) {
        let (tx, rx) = channel();
        let config = self.config.clone();
        thread::spawn(move || {
            let result = api::delete_hotel(&config, &id);
            let _ = tx.send((id, result));
        });
        self.delete_rx = Some(rx);
    }
}

fn replace_or_insert(hotels: &mut Vec<HotelDto>, hotel: &HotelDto) {
    if let Some(existing) = hotels.iter_mut().find(|h| h.id == hotel.id) {
        *existing = hotel.clone();
    } else {
        hotels.insert(0, hotel.clone());
    }
}

fn parse_price(raw: &str, label: &str) -> Result<i64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| format!("{label} must be a whole number"))
}
