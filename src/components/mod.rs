pub mod stadium_view;
