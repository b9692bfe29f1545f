mod habit_stats_queries;

pub use habit_stats_queries::HabitStatsQueries;
