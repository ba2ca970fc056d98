use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct SingerResponse { pub id: String, pub name: String, pub songs: Vec<String> }

#[derive(ToSchema)]
pub struct AddSingerRequest { pub name: String, pub songs: Option<Vec<String>> }

#[derive(ToSchema)]
pub struct RenameRequest { pub name: String }

#[derive(ToSchema)]
pub struct AddSongsRequest { pub songs: Vec<String> }

#[derive(ToSchema)]
pub struct CreatedResponse { pub message: String, pub id: String }

#[derive(ToSchema)]
pub struct MessageResponse { pub message: String }

#[derive(ToSchema)]
pub struct ErrorResponse { pub error: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::singers::add_singer,
        crate::routes::singers::list_singers,
        crate::routes::singers::get_singer,
        crate::routes::singers::get_singer_songs,
        crate::routes::singers::update_singer_name,
        crate::routes::singers::update_singer_songs,
        crate::routes::singers::delete_singer,
        crate::routes::singers::delete_song,
    ),
    components(
        schemas(
            HealthResponse,
            SingerResponse,
            AddSingerRequest,
            RenameRequest,
            AddSongsRequest,
            CreatedResponse,
            MessageResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "health"),
        (name = "singers")
    )
)]
pub struct ApiDoc;
