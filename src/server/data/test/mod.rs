mod airplane;
mod country;
mod flight;
mod flight_crew;
mod order;
mod refresh_token;
mod ticket;
mod user;
