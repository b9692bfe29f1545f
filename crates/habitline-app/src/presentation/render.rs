use crate::application::dtos::{HabitDto, HabitStatsDto, ReminderDto, StreakTimelineDto};

pub fn help() {
    println!("\nCommands:");
    println!("  add <name> [easy|medium|hard]   Register a habit (default: medium)");
    println!("  done <name>                     Mark a habit complete for today");
    println!("  list                            Show all habits");
    println!("  stats [name]                    Show streak statistics");
    println!("  chart [name]                    Show per-day streak timelines");
    println!("  remind <name> <HH:MM>           Add a daily reminder");
    println!("  reminders                       Show all reminders");
    println!("  help                            Show this help");
    println!("  quit                            Exit");
    println!();
}

pub fn habit_table(habits: &[HabitDto]) {
    if habits.is_empty() {
        println!("No habits yet. Use 'add <name>' to create one.");
        return;
    }

    println!("{:<24} {:>7}  {:<8} {:<12}", "Name", "Streak", "Level", "Last done");
    for habit in habits {
        println!(
            "{:<24} {:>7}  {:<8} {:<12}",
            habit.name,
            habit.streak,
            habit.difficulty,
            habit.last_completed.as_deref().unwrap_or("-"),
        );
    }
}

pub fn stats_blocks(stats: &[HabitStatsDto]) {
    if stats.is_empty() {
        println!("No habits yet. Use 'add <name>' to create one.");
        return;
    }

    for entry in stats {
        println!("\n--- {} ---", entry.name);
        println!("Current streak:  {} days", entry.current_streak);
        println!("Longest streak:  {} days", entry.longest_streak);
        println!("Completion rate: {:.2}%", entry.completion_rate);
        println!("Days completed:  {}", entry.total_completed_days);
        println!("Difficulty:      {}", entry.difficulty);
    }
    println!();
}

pub fn streak_chart(timelines: &[StreakTimelineDto]) {
    if timelines.is_empty() {
        println!("No habits yet. Use 'add <name>' to create one.");
        return;
    }

    for timeline in timelines {
        println!("\n--- {} ---", timeline.name);
        if timeline.points.is_empty() {
            println!("No completions recorded yet.");
            continue;
        }
        for point in &timeline.points {
            println!(
                "{} {} {}",
                point.date,
                "█".repeat(point.streak as usize),
                point.streak
            );
        }
    }
    println!();
}

pub fn reminder_table(reminders: &[ReminderDto]) {
    if reminders.is_empty() {
        println!("No reminders yet. Use 'remind <name> <HH:MM>' to add one.");
        return;
    }

    println!("{:<24} {:<5}", "Habit", "Time");
    for reminder in reminders {
        println!("{:<24} {:<5}", reminder.habit, reminder.time);
    }
}

pub fn scheduler_status(running: bool) {
    if running {
        println!("Scheduler: running (checks every minute)");
    } else {
        println!("Scheduler: stopped");
    }
}
