mod youtube_feed;
