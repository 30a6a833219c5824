//! # Help & Menu Text
//!
//! The welcome screen, the command reference, and the per-feature usage
//! menus shown when a command arrives without arguments.

pub const WELCOME: &str = concat!(
    "🤖 *Welcome to HelperBot!*\n",
    "\n",
    "I'm your all-purpose assistant. Here's what I can do:\n",
    "\n",
    "📝 *Tasks* - keep a personal to-do list\n",
    "💱 *Currency* - convert with live exchange rates\n",
    "🌤️ *Weather* - current conditions for any city\n",
    "🎲 *Random* - numbers and choices\n",
    "\n",
    "Use the menu buttons or /help to get started!"
);

pub const MAIN: &str = concat!(
    "📋 *Available commands:*\n",
    "\n",
    "*Tasks:*\n",
    "/todo add [task] - add a task\n",
    "/todo list - show your tasks\n",
    "/todo delete [number] - delete a task\n",
    "\n",
    "*Currency:*\n",
    "/currency [amount] [from] [to]\n",
    "Example: `/currency 100 USD EUR`\n",
    "\n",
    "*Weather:*\n",
    "/weather [city]\n",
    "Example: `/weather London`\n",
    "\n",
    "*Random:*\n",
    "/random number [min] [max]\n",
    "Example: `/random number 1 100`\n",
    "/random choice [options] - pick one for you\n",
    "Example: `/random choice pizza sushi pasta`"
);

pub const RANDOM_MENU: &str = concat!(
    "🎲 *Random generator*\n",
    "\n",
    "*Random number:*\n`/random number 1 100`\n",
    "\n",
    "*Random choice:*\n`/random choice pizza sushi pasta`\n",
    "\n",
    "*Examples:*\n",
    "• `/random number 1 50` - number from 1 to 50\n",
    "• `/random choice tea coffee juice` - pick a drink\n",
    "• `/random choice yes no` - settle it"
);

pub const CURRENCY_MENU: &str = concat!(
    "💱 *Currency converter*\n",
    "\n",
    "Use:\n`/currency [amount] [from] [to]`\n",
    "\n",
    "*Example:*\n`/currency 100 USD EUR`\n",
    "*Codes:* USD, EUR, GBP, JPY, CNY, etc."
);

pub const WEATHER_MENU: &str = concat!(
    "🌤️ *Weather*\n",
    "\n",
    "Name a city:\n`/weather London`"
);
