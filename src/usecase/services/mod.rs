pub mod grid_session;
