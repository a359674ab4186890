//! Page components.

mod dashboard;
mod leaderboard;
mod login;
mod playlist_videos;
mod playlists;
mod profile;
mod rewards;
mod video_quiz;

pub use dashboard::DashboardPage;
pub use leaderboard::LeaderboardPage;
pub use login::LoginPage;
pub use playlist_videos::PlaylistVideosPage;
pub use playlists::PlaylistsPage;
pub use profile::ProfilePage;
pub use rewards::RewardsPage;
pub use video_quiz::VideoQuizPage;
